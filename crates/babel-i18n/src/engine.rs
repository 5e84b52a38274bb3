//! Lookup engine: language fallback, placeholder substitution, line breaks.

use crate::catalog::{Catalog, TranslationSet};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::variables::Variables;
use babel_common::LanguageCode;

/// Language consulted when the active language has no translations.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// Returned when lookup is called without a key.
pub const MISSING_KEY_SENTINEL: &str = "???";

/// Marker replaced by a newline in resolved text.
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Resolves keys against a catalog. Holds only the fallback language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEngine {
    default_language: LanguageCode,
}

impl Default for LookupEngine {
    fn default() -> Self {
        Self::with_default_language(DEFAULT_LANGUAGE)
    }
}

impl LookupEngine {
    /// Engine falling back to `language` instead of `EN`
    pub fn with_default_language(language: impl Into<LanguageCode>) -> Self {
        Self {
            default_language: language.into(),
        }
    }

    /// The fallback language
    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Resolve `key` to display text. Never fails.
    ///
    /// - no key: `???`
    /// - active language not loaded: the default language is used instead
    /// - neither loaded, or key not in the chosen language: the key itself
    ///
    /// Variables are substituted before `<br>` becomes a newline.
    pub fn resolve(
        &self,
        catalog: &Catalog,
        key: Option<&str>,
        active_language: &str,
        variables: Option<&Variables>,
        sink: &dyn DiagnosticSink,
    ) -> String {
        let Some(key) = key else {
            sink.emit(&Diagnostic::KeyArgumentMissing);
            return MISSING_KEY_SENTINEL.to_string();
        };

        let Some(translations) = self.translations_for(catalog, active_language, sink) else {
            return key.to_string();
        };

        let Some(text) = translations.get(key) else {
            sink.emit(&Diagnostic::KeyMissing {
                key: key.to_string(),
                language: active_language.to_string(),
            });
            return key.to_string();
        };

        let text = match variables {
            Some(vars) if !vars.is_empty() => substitute(text, vars),
            _ => text.to_string(),
        };

        expand_line_breaks(&text)
    }

    fn translations_for<'c>(
        &self,
        catalog: &'c Catalog,
        active_language: &str,
        sink: &dyn DiagnosticSink,
    ) -> Option<&'c TranslationSet> {
        if let Some(translations) = catalog.get(active_language) {
            return Some(translations);
        }

        sink.emit(&Diagnostic::LanguageMissing {
            language: active_language.to_string(),
            fallback: self.default_language.to_string(),
        });
        catalog.get(self.default_language.as_str())
    }
}

/// Resolve with the default engine (fallback language `EN`).
pub fn resolve(
    catalog: &Catalog,
    key: Option<&str>,
    active_language: &str,
    variables: Option<&Variables>,
    sink: &dyn DiagnosticSink,
) -> String {
    LookupEngine::default().resolve(catalog, key, active_language, variables, sink)
}

/// Replace every `{name}` with its value. Unknown placeholders are left alone.
///
/// This is plain text replacement in name order; a substituted value that
/// itself looks like a later placeholder will be replaced too.
pub fn substitute(text: &str, variables: &Variables) -> String {
    variables
        .iter()
        .fold(text.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}

/// Replace every `<br>` with `\n`.
pub fn expand_line_breaks(text: &str) -> String {
    text.replace(LINE_BREAK_MARKER, "\n")
}
