//! Error types for catalog loading operations
//!
//! These never escape the loader: each one is turned into a
//! [`Diagnostic`](crate::Diagnostic) and the load carries on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading translation files
#[derive(Error, Debug)]
pub enum I18nError {
    /// The translations directory could not be enumerated
    #[error("Failed to read translations directory {}: {source}", path.display())]
    DirectoryUnreadable {
        /// Directory that was scanned
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A translation file could not be opened or read to the end
    #[error("Failed to read translation file {}: {source}", path.display())]
    FileUnreadable {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl I18nError {
    /// Path of the directory or file involved in the failure
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryUnreadable { path, .. } | Self::FileUnreadable { path, .. } => path,
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
