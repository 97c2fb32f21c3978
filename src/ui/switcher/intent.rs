use crate::ui::mvi::Intent;

/// Focus movements over the switcher buttons.
///
/// `options` is the number of buttons currently shown, which changes
/// whenever the active language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherIntent {
    Next { options: usize },
    Previous { options: usize },
    /// Focus a button directly (digit keys). Out-of-range indices are ignored.
    Select { index: usize, options: usize },
    /// Back to the first button, used after a language change.
    Reset,
}

impl Intent for SwitcherIntent {}
