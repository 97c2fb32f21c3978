use crate::i18n::catalog::LanguageCode;
use crate::ui::mvi::UiState;

/// The single mutable value of a translation store.
///
/// `language` is always a member of the catalog the store was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationState {
    pub language: LanguageCode,
}

impl UiState for TranslationState {}

impl TranslationState {
    pub fn new(language: impl Into<LanguageCode>) -> Self {
        Self {
            language: language.into(),
        }
    }
}
