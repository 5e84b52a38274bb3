//! Test utilities and shared test helpers for Babel.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Create a temporary directory populated with the given translation files.
///
/// Each entry is `(file name, contents)`, e.g. `("EN.txt", "hello=Hi")`.
#[cfg(feature = "tempfile")]
pub fn create_translation_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = create_temp_dir();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents)
            .unwrap_or_else(|e| panic!("Failed to write fixture {name}: {e}"));
    }
    dir
}

/// Translation file fixtures.
pub mod translation_fixtures {
    /// English file with a placeholder, a trailing comma and quoting.
    pub const EN_TXT: &str = concat!(
        "hello=Hi {name}!,\n",
        "farewell = \"Goodbye\",\n",
        "menu.title=Main Menu\n",
        "help=Line one<br>Line two\n",
    );

    /// Chinese file overriding one key.
    pub const ZH_TXT: &str = "hello=你好{name}！\n";

    /// The two-language directory layout used by most integration tests.
    pub fn sample_files() -> Vec<(&'static str, &'static str)> {
        vec![("EN.txt", EN_TXT), ("ZH.txt", ZH_TXT)]
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid test configuration as TOML string.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[translations]
directory = "translations"
"#
    }

    /// Create a full test configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "translations:\n",
            "  directory: \"lang\"\n",
            "  extension: \".txt\"\n",
            "  default_language: \"EN\"\n",
            "  language: \"ZH\"\n",
            "\n",
            "logging:\n",
            "  filter: \"babel=debug\"\n",
            "  file: \"logs/babel.log\"\n",
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::LanguageCode;
    use proptest::prelude::*;

    /// Strategy for generating language codes like `EN` or `ZH_CN`.
    pub fn language_code_strategy() -> impl Strategy<Value = LanguageCode> {
        r"[A-Z]{2}(_[A-Z]{2})?".prop_map(LanguageCode::from)
    }

    /// Strategy for generating translation keys.
    ///
    /// Keys never contain `=` or surrounding whitespace.
    pub fn translation_key_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z][a-zA-Z0-9_.]{0,24}".prop_map(|s| s.to_string())
    }

    /// Strategy for generating translation values without quotes or a trailing comma.
    pub fn translation_value_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9{}=<>!? ]{0,24}[a-zA-Z0-9!?]".prop_map(|s| s.to_string())
    }
}
