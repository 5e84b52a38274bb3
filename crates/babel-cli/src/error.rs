//! Application-wide error types using thiserror.

use babel_common::BabelError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] BabelError),

    /// A `--var` argument was not of the form `NAME=VALUE`.
    #[error("Invalid variable '{0}': expected NAME=VALUE")]
    InvalidVariable(String),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the command-line application.
pub type CliResult<T> = Result<T, CliError>;
