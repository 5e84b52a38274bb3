//! # Babel CLI
//!
//! Command-line front end for Babel translation catalogs.
//!
//! Loads configuration, builds a translator over the configured directory, and
//! resolves keys or lists the languages that were found.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod logging;

pub use app::*;
pub use error::*;
pub use logging::*;
