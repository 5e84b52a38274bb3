//! Translator: one catalog, one language source, one diagnostic sink.
//!
//! The catalog sits behind an [`ArcSwap`], so a reload replaces it in a single
//! pointer swap and concurrent lookups never see a half-built catalog.

use crate::catalog::Catalog;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::engine::LookupEngine;
use crate::language::LanguageProvider;
use crate::loader::CatalogLoader;
use crate::variables::Variables;
use arc_swap::ArcSwap;
use babel_common::LanguageCode;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Counts from the most recent load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Languages now in the catalog
    pub languages: usize,
    /// Entries across all languages
    pub entries: usize,
    /// Directory or file failures reported during the load
    pub failures: usize,
}

/// Looks up display text in the language the host is currently using.
pub struct Translator {
    directory: PathBuf,
    loader: CatalogLoader,
    engine: LookupEngine,
    provider: Arc<dyn LanguageProvider>,
    sink: Arc<dyn DiagnosticSink>,
    catalog: ArcSwap<Catalog>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("directory", &self.directory)
            .field("loader", &self.loader)
            .field("engine", &self.engine)
            .field("languages", &self.catalog.load().len())
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Create a translator reading from `directory`.
    ///
    /// The catalog starts empty; call [`load_translations`](Self::load_translations).
    pub fn new(directory: impl AsRef<Path>, provider: impl LanguageProvider + 'static) -> Self {
        Self::with_shared_provider(directory, Arc::new(provider))
    }

    /// Create a translator whose language source is shared with the host
    pub fn with_shared_provider(
        directory: impl AsRef<Path>,
        provider: Arc<dyn LanguageProvider>,
    ) -> Self {
        let directory = directory.as_ref().to_path_buf();
        info!("Initializing translator for {:?}", directory);

        Self {
            directory,
            loader: CatalogLoader::new(),
            engine: LookupEngine::default(),
            provider,
            sink: Arc::new(TracingSink),
            catalog: ArcSwap::from_pointee(Catalog::new()),
        }
    }

    /// Send diagnostics to `sink` instead of `tracing`
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Recognise translation files by `extension` instead of `.txt`
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.loader = CatalogLoader::with_extension(extension);
        self
    }

    /// Fall back to `language` instead of `EN`
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<LanguageCode>) -> Self {
        self.engine = LookupEngine::with_default_language(language);
        self
    }

    /// (Re)load every translation file and swap the new catalog in.
    pub fn load_translations(&self) -> LoadSummary {
        let report = self.loader.load(&self.directory);
        let failures = report.diagnostics.len();
        let catalog = report.into_catalog(self.sink.as_ref());

        let summary = LoadSummary {
            languages: catalog.len(),
            entries: catalog.entry_count(),
            failures,
        };
        self.catalog.store(Arc::new(catalog));

        info!(
            "Translations ready: {} languages, {} entries, {} failures",
            summary.languages, summary.entries, summary.failures
        );
        summary
    }

    /// Text for `key` in the current language
    pub fn translate(&self, key: &str) -> String {
        self.translate_opt(Some(key), None)
    }

    /// Text for `key` in the current language with `{name}` placeholders filled in
    pub fn translate_with(&self, key: &str, variables: &Variables) -> String {
        self.translate_opt(Some(key), Some(variables))
    }

    /// Lookup accepting an absent key, which yields `???`
    pub fn translate_opt(&self, key: Option<&str>, variables: Option<&Variables>) -> String {
        let catalog = self.catalog.load();
        let language = self.provider.current_language();
        self.engine
            .resolve(&catalog, key, language.as_str(), variables, self.sink.as_ref())
    }

    /// Snapshot of the current catalog
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    /// The language lookups currently use
    pub fn current_language(&self) -> LanguageCode {
        self.provider.current_language()
    }

    /// Directory translations are loaded from
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, Diagnostic};
    use crate::language::{FixedLanguage, MockLanguageProvider, SwitchableLanguage};
    use crate::vars;
    use babel_common::test_utils::{create_translation_dir, translation_fixtures};

    #[test]
    fn test_empty_until_loaded() {
        let dir = create_translation_dir(&translation_fixtures::sample_files());
        let translator = Translator::new(dir.path(), FixedLanguage::new("EN"));

        assert!(translator.catalog().is_empty());
        assert_eq!(translator.translate("menu.title"), "menu.title");

        translator.load_translations();
        assert_eq!(translator.translate("menu.title"), "Main Menu");
    }

    #[test]
    fn test_load_summary() {
        let dir = create_translation_dir(&translation_fixtures::sample_files());
        let translator = Translator::new(dir.path(), FixedLanguage::new("EN"));

        let summary = translator.load_translations();
        assert_eq!(
            summary,
            LoadSummary {
                languages: 2,
                entries: 5,
                failures: 0,
            }
        );
    }

    #[test]
    fn test_language_queried_on_every_lookup() {
        let dir = create_translation_dir(&translation_fixtures::sample_files());
        let mut provider = MockLanguageProvider::new();
        provider
            .expect_current_language()
            .times(2)
            .returning(|| LanguageCode::from("ZH"));

        let translator = Translator::new(dir.path(), provider);
        translator.load_translations();

        let vars = vars!["name" => "Lee"];
        assert_eq!(translator.translate_with("hello", &vars), "你好Lee！");
        assert_eq!(translator.translate("missing"), "missing");
    }

    #[test]
    fn test_language_switch_takes_effect() {
        let dir = create_translation_dir(&translation_fixtures::sample_files());
        let language = Arc::new(SwitchableLanguage::new("ZH"));
        let translator = Translator::with_shared_provider(dir.path(), language.clone());
        translator.load_translations();

        let vars = vars!["name" => "Lee"];
        assert_eq!(translator.translate_with("hello", &vars), "你好Lee！");

        language.set("FR");
        assert_eq!(translator.current_language(), LanguageCode::from("FR"));
        assert_eq!(translator.translate_with("hello", &vars), "Hi Lee!");
    }

    #[test]
    fn test_diagnostics_reach_sink() {
        let dir = create_translation_dir(&translation_fixtures::sample_files());
        let sink = Arc::new(CollectingSink::new());
        let translator =
            Translator::new(dir.path(), FixedLanguage::new("EN")).with_sink(sink.clone());
        translator.load_translations();

        assert_eq!(translator.translate_opt(None, None), "???");
        assert_eq!(sink.diagnostics(), vec![Diagnostic::KeyArgumentMissing]);
    }

    #[test]
    fn test_custom_default_language_and_extension() {
        let dir = create_translation_dir(&[("DE.lang", "hello=Hallo\n"), ("EN.txt", "hello=Hi\n")]);
        let translator = Translator::new(dir.path(), FixedLanguage::new("FR"))
            .with_extension(".lang")
            .with_default_language("DE");
        translator.load_translations();

        assert_eq!(translator.translate("hello"), "Hallo");
        assert!(!translator.catalog().contains_language("EN"));
        assert_eq!(translator.directory(), dir.path());
    }
}
