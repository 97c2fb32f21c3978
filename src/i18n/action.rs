use crate::i18n::catalog::LanguageCode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateAction {
    /// Make `language` the active language. Ignored when the catalog
    /// does not know the code.
    ChangeLanguage { language: LanguageCode },
}

impl Intent for TranslateAction {}

impl TranslateAction {
    pub fn change_language(language: impl Into<LanguageCode>) -> Self {
        Self::ChangeLanguage {
            language: language.into(),
        }
    }
}
