//! Runtime validation of loaded configuration.

use crate::schema::Config;
use babel_common::Result;
use tracing::debug;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()?;
        debug!(
            "Configuration valid: translations in {:?}, default language {}",
            config.translations.directory, config.translations.default_language
        );
        Ok(())
    }
}
