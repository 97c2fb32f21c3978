//! Translation state container.
//!
//! ```text
//! TranslateProvider ──owns──→ TranslateStore ──reduce──→ TranslationState
//!        │                        ↑      │
//!     context()             dispatch   notify
//!        ↓                        │      ↓
//! TranslateContext ──dispatcher()─┘   subscribers (re-render)
//!        └──translator()──→ Translator { t(key), languages() }
//! ```

mod action;
mod catalog;
mod provider;
mod reducer;
mod state;
mod store;
mod translator;

pub use action::TranslateAction;
pub use catalog::{Catalog, CatalogError, LanguageCode, TranslationTable};
pub use provider::{Dispatch, TranslateContext, TranslateProvider};
pub use reducer::TranslateReducer;
pub use state::TranslationState;
pub use store::{SubscriptionId, TranslateStore};
pub use translator::Translator;
