//! Application wiring: configuration in, translator out.

use crate::error::{CliError, CliResult};
use babel_common::LanguageCode;
use babel_config::{Config, ConfigValidator};
use babel_i18n::{LoadSummary, SwitchableLanguage, Translator, Variables};
use std::sync::Arc;
use tracing::debug;

/// A translator built from configuration, with a switchable active language.
pub struct App {
    config: Arc<Config>,
    language: Arc<SwitchableLanguage>,
    translator: Translator,
}

impl App {
    /// Validates `config` and builds the translator. Translations are not loaded yet.
    pub fn new(config: Config) -> CliResult<Self> {
        ConfigValidator::validate(&config)?;

        let translations = &config.translations;
        let language = Arc::new(SwitchableLanguage::new(
            translations.active_language().clone(),
        ));
        let translator = Translator::with_shared_provider(&translations.directory, language.clone())
            .with_extension(translations.extension.clone())
            .with_default_language(translations.default_language.clone());

        Ok(Self {
            config: Arc::new(config),
            language,
            translator,
        })
    }

    /// Loads (or reloads) every translation file.
    pub fn load(&self) -> LoadSummary {
        self.translator.load_translations()
    }

    /// Resolves `key`, optionally switching the active language first.
    pub fn lookup(&self, key: &str, language: Option<&str>, variables: &Variables) -> String {
        if let Some(language) = language {
            debug!("Switching active language to {}", language);
            self.language.set(language);
        }
        self.translator.translate_with(key, variables)
    }

    /// Loaded languages with their entry counts, sorted by code.
    pub fn languages(&self) -> Vec<(LanguageCode, usize)> {
        let catalog = self.translator.catalog();
        catalog
            .languages()
            .into_iter()
            .map(|code| {
                let entries = catalog.get(code.as_str()).map_or(0, |set| set.len());
                (code.clone(), entries)
            })
            .collect()
    }

    /// The configuration this app was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Parses a `NAME=VALUE` argument. The value may itself contain `=`.
pub fn parse_variable(arg: &str) -> CliResult<(String, String)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(CliError::InvalidVariable(arg.to_string())),
    }
}

/// Parses every `NAME=VALUE` argument into a variable set.
pub fn parse_variables<S: AsRef<str>>(args: &[S]) -> CliResult<Variables> {
    args.iter()
        .map(|arg| parse_variable(arg.as_ref()))
        .collect::<CliResult<Vec<_>>>()
        .map(|pairs| pairs.into_iter().collect())
}
