//! # Babel Common
//!
//! Shared types, errors, and test utilities for the Babel workspace.
//!
//! This crate provides the foundational types used by the catalog loader,
//! the configuration layer, and the command-line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
