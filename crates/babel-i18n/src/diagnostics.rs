//! Non-fatal diagnostics reported while loading catalogs and resolving keys.
//!
//! Nothing in this crate fails outright; instead each degraded outcome is
//! described by a [`Diagnostic`] and handed to a [`DiagnosticSink`].

use crate::error::I18nError;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, warn};

/// A human-readable report about a degraded load or lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The translations directory was missing or unreadable; the catalog is empty.
    #[error("Failed to load translations from {path}: {reason}")]
    DirectoryUnreadable {
        /// Directory that was scanned
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// A translation file failed to open or read; entries read before the failure are kept.
    #[error("Failed to load translation file {path}: {reason}")]
    FileUnreadable {
        /// File that failed
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// The active language has no translations; lookup fell back.
    #[error("No translations for language code: {language}, falling back to {fallback}")]
    LanguageMissing {
        /// Requested language
        language: String,
        /// Language used instead
        fallback: String,
    },

    /// The key has no translation; the key itself is displayed.
    #[error("No translation for key: {key} for language: {language}")]
    KeyMissing {
        /// Requested key
        key: String,
        /// Active language at lookup time
        language: String,
    },

    /// Lookup was called without a key.
    #[error("The translation key was not provided")]
    KeyArgumentMissing,
}

impl Diagnostic {
    /// Whether this diagnostic came from loading rather than lookup
    pub const fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::DirectoryUnreadable { .. } | Self::FileUnreadable { .. }
        )
    }
}

impl From<&I18nError> for Diagnostic {
    fn from(error: &I18nError) -> Self {
        match error {
            I18nError::DirectoryUnreadable { path, source } => Self::DirectoryUnreadable {
                path: path.display().to_string(),
                reason: source.to_string(),
            },
            I18nError::FileUnreadable { path, source } => Self::FileUnreadable {
                path: path.display().to_string(),
                reason: source.to_string(),
            },
        }
    }
}

impl From<I18nError> for Diagnostic {
    fn from(error: I18nError) -> Self {
        Self::from(&error)
    }
}

/// Receives diagnostics. Implementations must not fail or block for long.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::LanguageMissing { .. } => debug!("{}", diagnostic),
            _ => warn!("{}", diagnostic),
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything collected so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Remove and return everything collected so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of diagnostics collected
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing was collected
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_diagnostic_messages() {
        let diagnostic = Diagnostic::KeyMissing {
            key: "menu.title".to_string(),
            language: "ZH".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "No translation for key: menu.title for language: ZH"
        );

        let diagnostic = Diagnostic::LanguageMissing {
            language: "FR".to_string(),
            fallback: "EN".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "No translations for language code: FR, falling back to EN"
        );

        assert_eq!(
            Diagnostic::KeyArgumentMissing.to_string(),
            "The translation key was not provided"
        );
    }

    #[test]
    fn test_diagnostic_from_error() {
        let error = I18nError::FileUnreadable {
            path: PathBuf::from("translations/EN.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let diagnostic = Diagnostic::from(&error);

        assert!(diagnostic.is_load_failure());
        assert_eq!(
            diagnostic,
            Diagnostic::FileUnreadable {
                path: "translations/EN.txt".to_string(),
                reason: "denied".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_diagnostics_are_not_load_failures() {
        assert!(!Diagnostic::KeyArgumentMissing.is_load_failure());
        assert!(!Diagnostic::KeyMissing {
            key: "k".to_string(),
            language: "EN".to_string()
        }
        .is_load_failure());
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.emit(&Diagnostic::KeyArgumentMissing);
        sink.emit(&Diagnostic::KeyArgumentMissing);
        assert_eq!(sink.len(), 2);

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let count = AtomicUsize::new(0);
        let sink = |_: &Diagnostic| {
            count.fetch_add(1, Ordering::SeqCst);
        };

        sink.emit(&Diagnostic::KeyArgumentMissing);
        sink.emit(&Diagnostic::KeyArgumentMissing);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tracing_and_null_sinks_accept_everything() {
        babel_common::test_utils::init_test_logging();

        let diagnostics = [
            Diagnostic::KeyArgumentMissing,
            Diagnostic::LanguageMissing {
                language: "FR".to_string(),
                fallback: "EN".to_string(),
            },
        ];
        for diagnostic in &diagnostics {
            TracingSink.emit(diagnostic);
            NullSink.emit(diagnostic);
        }
    }
}
