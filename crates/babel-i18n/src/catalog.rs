//! Two-level translation catalog: language code, then translation key.

use babel_common::LanguageCode;
use std::collections::hash_map;
use std::collections::HashMap;

/// Key to text mapping for a single language.
///
/// Keys are matched exactly and case-sensitively. Text may contain `{name}`
/// placeholders and `<br>` markers; both are left as-is until lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet {
    entries: HashMap<String, String>,
}

impl TranslationSet {
    /// Create an empty translation set
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether `key` has a translation
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert an entry, returning the text it replaced.
    ///
    /// Later inserts win over earlier ones, silently.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, text)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TranslationSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, text) in iter {
            self.insert(key, text);
        }
    }
}

/// All loaded translations, keyed by language code.
///
/// A language without translations is simply absent; the catalog never holds
/// an empty placeholder for a language it did not load. Catalogs are built
/// once by the loader and then treated as read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    languages: HashMap<LanguageCode, TranslationSet>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Translation set for `language`, if loaded
    pub fn get(&self, language: &str) -> Option<&TranslationSet> {
        self.languages.get(language)
    }

    /// Whether `language` was loaded
    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Install `set` under `language`, replacing any previous set for it
    pub fn insert(
        &mut self,
        language: impl Into<LanguageCode>,
        set: TranslationSet,
    ) -> Option<TranslationSet> {
        self.languages.insert(language.into(), set)
    }

    /// Loaded language codes, sorted
    pub fn languages(&self) -> Vec<&LanguageCode> {
        let mut languages: Vec<&LanguageCode> = self.languages.keys().collect();
        languages.sort();
        languages
    }

    /// Number of loaded languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language was loaded
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Total number of entries across all languages
    pub fn entry_count(&self) -> usize {
        self.languages.values().map(TranslationSet::len).sum()
    }

    /// Iterate over `(language, set)` pairs in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, LanguageCode, TranslationSet> {
        self.languages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_set_last_write_wins() {
        let mut set = TranslationSet::new();
        assert_eq!(set.insert("hello", "Hi"), None);
        assert_eq!(set.insert("hello", "Hey"), Some("Hi".to_string()));

        assert_eq!(set.get("hello"), Some("Hey"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_translation_set_keys_are_case_sensitive() {
        let set: TranslationSet = [("Hello", "Hi")].into_iter().collect();
        assert!(set.contains_key("Hello"));
        assert!(!set.contains_key("hello"));
    }

    #[test]
    fn test_translation_set_sorted_keys() {
        let set: TranslationSet = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        assert_eq!(set.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_catalog_insert_replaces_whole_language() {
        let mut catalog = Catalog::new();
        catalog.insert("EN", [("a", "1"), ("b", "2")].into_iter().collect());
        catalog.insert("EN", [("c", "3")].into_iter().collect());

        let en = catalog.get("EN").unwrap();
        assert_eq!(en.len(), 1);
        assert_eq!(en.get("a"), None);
        assert_eq!(en.get("c"), Some("3"));
    }

    #[test]
    fn test_catalog_languages_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert("ZH", TranslationSet::new());
        catalog.insert("EN", [("a", "1")].into_iter().collect());

        let codes: Vec<&str> = catalog.languages().into_iter().map(LanguageCode::as_str).collect();
        assert_eq!(codes, vec!["EN", "ZH"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entry_count(), 1);
        assert!(!catalog.contains_language("FR"));
    }
}
