//! Sources of the active language code.

use arc_swap::ArcSwap;
use babel_common::LanguageCode;
use std::sync::Arc;

/// Supplies the language the host application is currently displaying.
///
/// Reading the language must have no side effects.
#[cfg_attr(test, mockall::automock)]
pub trait LanguageProvider: Send + Sync {
    /// The active language code
    fn current_language(&self) -> LanguageCode;
}

impl<F> LanguageProvider for F
where
    F: Fn() -> LanguageCode + Send + Sync,
{
    fn current_language(&self) -> LanguageCode {
        self()
    }
}

/// A language that never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(LanguageCode);

impl FixedLanguage {
    /// Always report `code`
    pub fn new(code: impl Into<LanguageCode>) -> Self {
        Self(code.into())
    }
}

impl LanguageProvider for FixedLanguage {
    fn current_language(&self) -> LanguageCode {
        self.0.clone()
    }
}

/// A language the host can switch at runtime; reads are lock-free.
#[derive(Debug)]
pub struct SwitchableLanguage {
    current: ArcSwap<LanguageCode>,
}

impl SwitchableLanguage {
    /// Start with `code` as the active language
    pub fn new(code: impl Into<LanguageCode>) -> Self {
        Self {
            current: ArcSwap::from_pointee(code.into()),
        }
    }

    /// Switch the active language
    pub fn set(&self, code: impl Into<LanguageCode>) {
        self.current.store(Arc::new(code.into()));
    }
}

impl LanguageProvider for SwitchableLanguage {
    fn current_language(&self) -> LanguageCode {
        LanguageCode::clone(&self.current.load())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_language() {
        let provider = FixedLanguage::new("ZH");
        assert_eq!(provider.current_language(), LanguageCode::from("ZH"));
    }

    #[test]
    fn test_switchable_language() {
        let provider = SwitchableLanguage::new("EN");
        assert_eq!(provider.current_language(), LanguageCode::from("EN"));

        provider.set("ZH");
        assert_eq!(provider.current_language(), LanguageCode::from("ZH"));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || LanguageCode::from("FR");
        assert_eq!(provider.current_language(), LanguageCode::from("FR"));
    }

    #[test]
    fn test_shared_provider() {
        let provider = Arc::new(SwitchableLanguage::new("EN"));
        let shared: Arc<dyn LanguageProvider> = provider.clone();

        provider.set("DE");
        assert_eq!(shared.current_language(), LanguageCode::from("DE"));
    }
}
