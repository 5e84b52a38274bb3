//! Default values for every configuration section.

use crate::schema::*;
use babel_common::LanguageCode;
use std::path::PathBuf;

/// Default translations directory, relative to the working directory.
pub const DEFAULT_TRANSLATIONS_DIR: &str = "translations";

/// Default log filter.
pub const DEFAULT_LOG_FILTER: &str = "babel=info";

impl Default for Config {
    fn default() -> Self {
        Self {
            translations: TranslationsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_TRANSLATIONS_DIR),
            extension: ".txt".to_string(),
            default_language: LanguageCode::from("EN"),
            language: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file: None,
        }
    }
}
