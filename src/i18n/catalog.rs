//! Immutable translation catalog.
//!
//! Maps a language code to a table of dotted keys (`"Application.title"`)
//! and their localized text. Languages keep the order they were declared
//! in, which drives the order of the language switcher.

use std::collections::HashMap;
use thiserror::Error;

/// Short locale identifier such as `"en"` or `"es"`.
pub type LanguageCode = String;

/// Dotted key -> localized text for a single language.
pub type TranslationTable = HashMap<String, String>;

/// Errors raised while building a catalog or seeding a store from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one language")]
    Empty,

    #[error("Language code must not be empty")]
    EmptyCode,

    #[error("Language '{code}' is declared more than once")]
    DuplicateLanguage { code: String },

    #[error("Default language '{code}' is not present in the catalog")]
    UnknownDefault { code: String },

    #[error("Language '{code}' not found in catalog")]
    UnknownLanguage { code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageEntry {
    code: LanguageCode,
    strings: TranslationTable,
}

/// Full set of translations for every supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    default_language: LanguageCode,
    languages: Vec<LanguageEntry>,
}

impl Catalog {
    /// Builds a catalog from `(code, table)` pairs in declaration order.
    ///
    /// Fails when no language is given, a code is empty or repeated, or the
    /// default language is not one of the declared codes.
    pub fn new<I, C>(default_language: impl Into<String>, languages: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (C, TranslationTable)>,
        C: Into<String>,
    {
        let default_language = default_language.into();
        let mut entries: Vec<LanguageEntry> = Vec::new();

        for (code, strings) in languages {
            let code = code.into();
            if code.trim().is_empty() {
                return Err(CatalogError::EmptyCode);
            }
            if entries.iter().any(|entry| entry.code == code) {
                return Err(CatalogError::DuplicateLanguage { code });
            }
            entries.push(LanguageEntry { code, strings });
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !entries.iter().any(|entry| entry.code == default_language) {
            return Err(CatalogError::UnknownDefault {
                code: default_language,
            });
        }

        Ok(Self {
            default_language,
            languages: entries,
        })
    }

    /// Language the store starts with and the first fallback for lookups.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// Language codes in declaration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> + '_ {
        self.languages.iter().map(|entry| entry.code.as_str())
    }

    /// Raw lookup without any fallback.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.entry(code)?.strings.get(key).map(String::as_str)
    }

    fn entry(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|entry| entry.code == code)
    }
}
