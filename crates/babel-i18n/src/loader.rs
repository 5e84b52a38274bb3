//! Catalog loading from a directory of `<LANGUAGE>.txt` files.
//!
//! Loading never fails. A missing directory yields an empty catalog, and a
//! file that breaks partway keeps the entries read before the break. Every
//! such problem is reported as a [`Diagnostic`] in the [`LoadReport`].

use crate::catalog::Catalog;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{I18nError, I18nResult};
use crate::parser::{self, ParsedFile};
use babel_common::LanguageCode;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extension recognised as a translation source.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Result of one load: the catalog plus everything that went wrong building it.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The assembled catalog
    pub catalog: Catalog,
    /// Diagnostics, in the order they occurred
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// Whether every file loaded cleanly
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Forward all diagnostics to `sink` and return the catalog
    pub fn into_catalog(self, sink: &dyn DiagnosticSink) -> Catalog {
        for diagnostic in &self.diagnostics {
            sink.emit(diagnostic);
        }
        self.catalog
    }
}

/// Loads every translation file in a directory into a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoader {
    extension: String,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }
}

impl CatalogLoader {
    /// Create a loader for `.txt` files
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader for files ending in `extension` (including the dot)
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// The recognised file extension
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Language code for a file name, or `None` if the file is not a translation source
    pub fn language_code(&self, file_name: &str) -> Option<LanguageCode> {
        file_name
            .strip_suffix(self.extension.as_str())
            .map(LanguageCode::from)
    }

    /// Load every translation file in `directory`.
    ///
    /// Files are read in name order. Loading the same directory twice gives
    /// equal catalogs.
    pub fn load(&self, directory: impl AsRef<Path>) -> LoadReport {
        let directory = directory.as_ref();
        let mut report = LoadReport::default();

        debug!("Loading translations from: {:?}", directory);

        let sources = match self.translation_sources(directory, &mut report.diagnostics) {
            Ok(sources) => sources,
            Err(e) => {
                report.diagnostics.push(Diagnostic::from(&e));
                return report;
            }
        };

        for (language, path) in sources {
            let ParsedFile { entries, error } = Self::read_file(&path);

            if let Some(source) = error {
                let error = I18nError::FileUnreadable {
                    path: path.clone(),
                    source,
                };
                report.diagnostics.push(Diagnostic::from(&error));
            }

            debug!(
                "Loaded {} entries for language {} from {:?}",
                entries.len(),
                language,
                path
            );
            report.catalog.insert(language, entries);
        }

        info!(
            "Loaded {} languages ({} entries) from {:?}",
            report.catalog.len(),
            report.catalog.entry_count(),
            directory
        );
        report
    }

    /// Matching files in `directory`, sorted by file name.
    ///
    /// A directory entry that cannot be read is reported and skipped.
    fn translation_sources(
        &self,
        directory: &Path,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> I18nResult<Vec<(LanguageCode, PathBuf)>> {
        let entries = fs::read_dir(directory).map_err(|source| I18nError::DirectoryUnreadable {
            path: directory.to_path_buf(),
            source,
        })?;

        let entries = entries.map(|entry| entry.map(|entry| (entry.file_name(), entry.path())));
        Ok(self.select_sources(directory, entries, diagnostics))
    }

    fn select_sources<I>(
        &self,
        directory: &Path,
        entries: I,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<(LanguageCode, PathBuf)>
    where
        I: IntoIterator<Item = io::Result<(OsString, PathBuf)>>,
    {
        let mut sources = Vec::new();
        for entry in entries {
            let (file_name, path) = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let error = I18nError::DirectoryUnreadable {
                        path: directory.to_path_buf(),
                        source,
                    };
                    debug!("Skipping directory entry: {}", error);
                    diagnostics.push(Diagnostic::from(&error));
                    continue;
                }
            };

            let Some(language) = file_name.to_str().and_then(|name| self.language_code(name))
            else {
                continue;
            };
            sources.push((language, path));
        }

        sources.sort_by(|a, b| a.1.cmp(&b.1));
        sources
    }

    fn read_file(path: &Path) -> ParsedFile {
        match File::open(path) {
            Ok(file) => parser::parse_reader(BufReader::new(file)),
            Err(e) => ParsedFile {
                error: Some(e),
                ..ParsedFile::default()
            },
        }
    }
}

/// Load `directory` with the default loader, reporting problems to `sink`.
pub fn load_catalog(directory: impl AsRef<Path>, sink: &dyn DiagnosticSink) -> Catalog {
    CatalogLoader::new().load(directory).into_catalog(sink)
}
