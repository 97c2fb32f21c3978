use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::i18n::{Dispatch, SubscriptionId, TranslateContext, TranslateProvider, TranslationState, Translator};
use crate::ui::mvi::Reducer;
use crate::ui::switcher::{switcher_options, SwitcherIntent, SwitcherReducer, SwitcherState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:expr, $intent:expr) => {
        $self.$field = $reducer.reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root component: mounts the translation provider around the screen.
pub struct App {
    should_quit: bool,
    /// Switcher focus (MVI pattern).
    switcher: SwitcherState,
    context: TranslateContext,
    dispatch: Dispatch,
    /// Set by the store subscriber and by local state changes.
    needs_redraw: Arc<AtomicBool>,
    subscription: SubscriptionId,
    /// Declared last so it unmounts after everything that borrows its store.
    provider: TranslateProvider,
}

impl App {
    pub fn new(provider: TranslateProvider) -> Self {
        let context = provider.context();
        let dispatch = context.dispatcher();
        let needs_redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&needs_redraw);
        let subscription = context.subscribe(move |state: &TranslationState| {
            tracing::debug!(language = %state.language, "Re-rendering for new language");
            flag.store(true, Ordering::Release);
        });
        Self {
            should_quit: false,
            switcher: SwitcherState::default(),
            context,
            dispatch,
            needs_redraw,
            subscription,
            provider,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn context(&self) -> &TranslateContext {
        &self.context
    }

    pub fn state(&self) -> TranslationState {
        self.context.state()
    }

    pub fn translator(&self) -> Translator {
        self.context.translator()
    }

    pub fn switcher(&self) -> SwitcherState {
        self.switcher
    }

    /// Languages the switcher currently offers.
    pub fn options(&self) -> Vec<String> {
        switcher_options(&self.translator())
    }

    pub fn select_next(&mut self) {
        let options = self.options().len();
        self.dispatch_switcher(SwitcherIntent::Next { options });
    }

    pub fn select_previous(&mut self) {
        let options = self.options().len();
        self.dispatch_switcher(SwitcherIntent::Previous { options });
    }

    /// Switches to the focused language. Returns `true` if it changed.
    pub fn activate_selected(&mut self) -> bool {
        let Some(code) = self.options().into_iter().nth(self.switcher.focused) else {
            return false;
        };
        let changed = self.dispatch.change_language(code);
        if changed {
            self.dispatch_switcher(SwitcherIntent::Reset);
        }
        changed
    }

    /// Focuses option `index` (zero-based) and activates it.
    pub fn activate_index(&mut self, index: usize) -> bool {
        let options = self.options().len();
        if index >= options {
            return false;
        }
        self.dispatch_switcher(SwitcherIntent::Select { index, options });
        self.activate_selected()
    }

    pub fn on_resize(&mut self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::AcqRel)
    }

    fn dispatch_switcher(&mut self, intent: SwitcherIntent) {
        let before = self.switcher;
        dispatch_mvi!(self, switcher, SwitcherReducer, intent);
        if self.switcher != before {
            self.needs_redraw.store(true, Ordering::Release);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.provider.context().unsubscribe(self.subscription);
    }
}
