use std::sync::Arc;

use crate::i18n::action::TranslateAction;
use crate::i18n::catalog::Catalog;
use crate::i18n::state::TranslationState;
use crate::ui::mvi::Reducer;

/// Transition function of the translation store.
///
/// Holds the catalog read-only so a change to an unknown language can be
/// turned into a no-op instead of breaking the state invariant.
#[derive(Debug, Clone)]
pub struct TranslateReducer {
    catalog: Arc<Catalog>,
}

impl TranslateReducer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

impl Reducer for TranslateReducer {
    type State = TranslationState;
    type Intent = TranslateAction;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TranslateAction::ChangeLanguage { language } => {
                if self.catalog.contains(&language) {
                    TranslationState { language }
                } else {
                    state
                }
            }
        }
    }
}
