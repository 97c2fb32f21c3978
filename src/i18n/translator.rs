use std::sync::Arc;

use crate::i18n::catalog::{Catalog, LanguageCode};
use crate::i18n::state::TranslationState;

/// Read-only lookup view over a catalog for one language.
///
/// Missing keys resolve in this order: active language, catalog default
/// language, then the key itself so the gap stays visible on screen.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<Catalog>,
    language: LanguageCode,
}

impl Translator {
    pub fn new(catalog: Arc<Catalog>, state: &TranslationState) -> Self {
        Self {
            catalog,
            language: state.language.clone(),
        }
    }

    /// Active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.catalog.lookup(&self.language, key) {
            return text;
        }

        let default = self.catalog.default_language();
        if default != self.language {
            if let Some(text) = self.catalog.lookup(default, key) {
                tracing::debug!(
                    key,
                    language = %self.language,
                    fallback = default,
                    "Translation missing, using default language"
                );
                return text;
            }
        }

        tracing::debug!(key, language = %self.language, "Translation missing, showing key");
        key
    }

    /// Every catalog language, in catalog order.
    pub fn languages(&self) -> Vec<&str> {
        self.catalog.languages().collect()
    }
}
