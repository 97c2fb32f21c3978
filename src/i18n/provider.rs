//! Scoped distribution of a translation store.
//!
//! A [`TranslateProvider`] mounts one store for the subtree it wraps and
//! hands every descendant a [`TranslateContext`]. Descendants read state
//! and translators through the context and write only through a
//! [`Dispatch`] handle.

use std::sync::Arc;

use crate::i18n::action::TranslateAction;
use crate::i18n::catalog::{Catalog, CatalogError, LanguageCode};
use crate::i18n::state::TranslationState;
use crate::i18n::store::{SubscriptionId, TranslateStore};
use crate::i18n::translator::Translator;

/// Owner of a translation store for the lifetime of a component subtree.
///
/// Dropping the provider detaches every subscriber.
#[derive(Debug)]
pub struct TranslateProvider {
    store: TranslateStore,
}

impl TranslateProvider {
    /// Mounts a store seeded with the catalog's default language.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let store = TranslateStore::with_default_language(catalog);
        tracing::debug!(language = %store.state().language, "Translation provider mounted");
        Self { store }
    }

    /// Mounts a store seeded with `language`.
    pub fn with_language(catalog: Arc<Catalog>, language: &str) -> Result<Self, CatalogError> {
        let store = TranslateStore::new(catalog, language)?;
        tracing::debug!(language, "Translation provider mounted");
        Ok(Self { store })
    }

    pub fn context(&self) -> TranslateContext {
        TranslateContext {
            store: self.store.clone(),
        }
    }
}

impl Drop for TranslateProvider {
    fn drop(&mut self) {
        let detached = self.store.clear_subscribers();
        tracing::debug!(detached, "Translation provider unmounted");
    }
}

/// Handle a descendant uses to reach its provider's store.
#[derive(Debug, Clone)]
pub struct TranslateContext {
    store: TranslateStore,
}

impl TranslateContext {
    pub fn state(&self) -> TranslationState {
        self.store.state()
    }

    pub fn dispatcher(&self) -> Dispatch {
        Dispatch {
            store: self.store.clone(),
        }
    }

    /// Translator bound to the current state.
    pub fn translator(&self) -> Translator {
        Translator::new(Arc::clone(self.store.catalog()), &self.store.state())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.store.catalog()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&TranslationState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}

/// Write channel of a translation store.
///
/// All handles obtained from one provider compare equal.
#[derive(Debug, Clone)]
pub struct Dispatch {
    store: TranslateStore,
}

impl Dispatch {
    /// Applies `action`. Returns `true` when the state changed.
    pub fn dispatch(&self, action: TranslateAction) -> bool {
        self.store.dispatch(action)
    }

    pub fn change_language(&self, language: impl Into<LanguageCode>) -> bool {
        self.dispatch(TranslateAction::change_language(language))
    }
}

impl PartialEq for Dispatch {
    fn eq(&self, other: &Self) -> bool {
        self.store.same_store(&other.store)
    }
}

impl Eq for Dispatch {}
