//! Configuration schema definitions using serde.

use babel_common::{BabelError, LanguageCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the translations directory.
pub const ENV_TRANSLATIONS_DIR: &str = "BABEL_TRANSLATIONS_DIR";
/// Environment variable overriding the active language.
pub const ENV_LANGUAGE: &str = "BABEL_LANGUAGE";
/// Environment variable overriding the fallback language.
pub const ENV_DEFAULT_LANGUAGE: &str = "BABEL_DEFAULT_LANGUAGE";
/// Environment variable overriding the log filter.
pub const ENV_LOG: &str = "BABEL_LOG";

/// Main configuration structure for Babel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation catalog configuration.
    pub translations: TranslationsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Where translations live and how lookups fall back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationsConfig {
    /// Directory holding `<LANGUAGE>.txt` files.
    pub directory: PathBuf,
    /// Extension of translation files, including the leading dot.
    pub extension: String,
    /// Language used when the active one has no translations.
    pub default_language: LanguageCode,
    /// Active language; the default language when unset.
    pub language: Option<LanguageCode>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `babel=debug`.
    pub filter: String,
    /// Optional log file, written in addition to stderr.
    pub file: Option<PathBuf>,
}

impl TranslationsConfig {
    /// The language lookups should use.
    pub fn active_language(&self) -> &LanguageCode {
        self.language.as_ref().unwrap_or(&self.default_language)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BabelError> {
        let translations = &self.translations;

        if translations.directory.as_os_str().is_empty() {
            return Err(BabelError::Config(
                "Translations directory cannot be empty".to_string(),
            ));
        }

        if translations.extension.is_empty() {
            return Err(BabelError::Config(
                "Translation file extension cannot be empty".to_string(),
            ));
        }

        if !translations.extension.starts_with('.') {
            return Err(BabelError::Config(format!(
                "Translation file extension must start with '.': {}",
                translations.extension
            )));
        }

        if translations.default_language.is_empty() {
            return Err(BabelError::Config(
                "Default language cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(dir) = lookup(ENV_TRANSLATIONS_DIR) {
            self.translations.directory = PathBuf::from(dir);
        }

        if let Some(language) = lookup(ENV_LANGUAGE) {
            self.translations.language = Some(LanguageCode::from(language));
        }

        if let Some(language) = lookup(ENV_DEFAULT_LANGUAGE) {
            self.translations.default_language = LanguageCode::from(language);
        }

        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
    }
}
