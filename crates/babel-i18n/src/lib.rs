//! # Babel I18n
//!
//! Flat-file translation catalogs with language fallback and placeholder
//! substitution.
//!
//! Translations live in one UTF-8 file per language (`EN.txt`, `ZH.txt`, ...)
//! made of `key=value` lines. This crate provides:
//!
//! - a tolerant catalog loader that skips unreadable files instead of failing
//! - a lookup engine with default-language and raw-key fallback
//! - `{name}` placeholder substitution and `<br>` line breaks
//! - a [`Translator`] that swaps freshly loaded catalogs in atomically
//!
//! # Example
//!
//! ```rust,no_run
//! use babel_i18n::{vars, FixedLanguage, Translator};
//!
//! let translator = Translator::new("translations", FixedLanguage::new("ZH"));
//! translator.load_translations();
//!
//! let greeting = translator.translate_with("hello", &vars!["name" => "Lee"]);
//! println!("{greeting}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod language;
pub mod loader;
pub mod parser;
pub mod translator;
pub mod variables;

pub use catalog::{Catalog, TranslationSet};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use engine::{resolve, LookupEngine, DEFAULT_LANGUAGE, LINE_BREAK_MARKER, MISSING_KEY_SENTINEL};
pub use error::{I18nError, I18nResult};
pub use language::{FixedLanguage, LanguageProvider, SwitchableLanguage};
pub use loader::{load_catalog, CatalogLoader, LoadReport, DEFAULT_EXTENSION};
pub use translator::{LoadSummary, Translator};
pub use variables::Variables;

pub use babel_common::LanguageCode;
