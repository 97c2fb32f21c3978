//! Translation store: current language, transition function and subscribers.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::i18n::action::TranslateAction;
use crate::i18n::catalog::{Catalog, CatalogError};
use crate::i18n::reducer::TranslateReducer;
use crate::i18n::state::TranslationState;
use crate::ui::mvi::Reducer;

/// Callback invoked with the new state after every state change.
type Subscriber = Arc<dyn Fn(&TranslationState) + Send + Sync>;

/// Handle returned by [`TranslateStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct StoreInner {
    state: TranslationState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
    /// A dispatch is currently delivering to subscribers.
    notifying: bool,
    /// State changed after the running delivery pass took its snapshot.
    pending: bool,
}

/// Shared translation store.
///
/// Clones point at the same state. Every dispatch reduces against the
/// latest state under the lock, so back-to-back dispatches never lose an
/// update. Subscribers run after the lock is released and may dispatch
/// again.
///
/// Only one dispatch delivers at a time. A dispatch that lands while
/// another one is delivering (nested in a subscriber, or from another
/// thread) only stores its state; the delivering call then restarts its
/// pass with the latest state, so the last state every subscriber sees is
/// the state the store holds.
#[derive(Clone)]
pub struct TranslateStore {
    reducer: Arc<TranslateReducer>,
    inner: Arc<Mutex<StoreInner>>,
}

impl TranslateStore {
    /// Creates a store seeded with `language`.
    pub fn new(catalog: Arc<Catalog>, language: &str) -> Result<Self, CatalogError> {
        if !catalog.contains(language) {
            return Err(CatalogError::UnknownLanguage {
                code: language.to_string(),
            });
        }
        Ok(Self::seeded(catalog, TranslationState::new(language)))
    }

    /// Creates a store seeded with the catalog's default language.
    pub fn with_default_language(catalog: Arc<Catalog>) -> Self {
        let state = TranslationState::new(catalog.default_language());
        Self::seeded(catalog, state)
    }

    fn seeded(catalog: Arc<Catalog>, state: TranslationState) -> Self {
        Self {
            reducer: Arc::new(TranslateReducer::new(catalog)),
            inner: Arc::new(Mutex::new(StoreInner {
                state,
                subscribers: Vec::new(),
                next_id: 0,
                notifying: false,
                pending: false,
            })),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.reducer.catalog()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> TranslationState {
        self.inner.lock().state.clone()
    }

    /// Applies `action` and notifies subscribers if the state changed.
    ///
    /// Returns `true` when the state changed.
    pub fn dispatch(&self, action: TranslateAction) -> bool {
        {
            let mut inner = self.inner.lock();
            let current = inner.state.clone();
            let next = self.reducer.reduce(current.clone(), action.clone());
            if next == current {
                drop(inner);
                self.log_noop(&action);
                return false;
            }
            tracing::info!(language = %next.language, "Active language changed");
            inner.state = next;
            if inner.notifying {
                inner.pending = true;
                return true;
            }
            inner.notifying = true;
        }

        self.deliver();
        true
    }

    /// Runs delivery passes until no newer state arrived during a pass.
    fn deliver(&self) {
        let mut guard = DeliveryGuard {
            inner: &self.inner,
            finished: false,
        };
        'pass: loop {
            let (state, subscribers) = {
                let mut inner = self.inner.lock();
                inner.pending = false;
                let subscribers: Vec<Subscriber> = inner
                    .subscribers
                    .iter()
                    .map(|(_, subscriber)| Arc::clone(subscriber))
                    .collect();
                (inner.state.clone(), subscribers)
            };

            for subscriber in subscribers {
                if self.inner.lock().pending {
                    continue 'pass;
                }
                subscriber(&state);
            }

            // Check and release under one lock so a concurrent dispatch
            // either sees `notifying` cleared or is picked up here.
            let mut inner = self.inner.lock();
            if !inner.pending {
                inner.notifying = false;
                guard.finished = true;
                break;
            }
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&TranslationState) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Removes a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(existing, _)| *existing != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }

    pub(crate) fn clear_subscribers(&self) -> usize {
        let mut inner = self.inner.lock();
        let removed = inner.subscribers.len();
        inner.subscribers.clear();
        removed
    }

    /// True when both handles point at the same store.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn log_noop(&self, action: &TranslateAction) {
        match action {
            TranslateAction::ChangeLanguage { language } => {
                if self.catalog().contains(language) {
                    tracing::debug!(language = %language, "Language already active");
                } else {
                    tracing::warn!(
                        language = %language,
                        "Ignoring change to a language missing from the catalog"
                    );
                }
            }
        }
    }
}

/// Clears the delivering flag if a subscriber panics mid-pass.
struct DeliveryGuard<'a> {
    inner: &'a Mutex<StoreInner>,
    finished: bool,
}

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let mut inner = self.inner.lock();
            inner.notifying = false;
            inner.pending = false;
        }
    }
}

impl std::fmt::Debug for TranslateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("TranslateStore")
            .field("state", &inner.state)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
