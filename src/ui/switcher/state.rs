use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitcherState {
    /// Index into the switcher options of the focused button.
    pub focused: usize,
}

impl UiState for SwitcherState {}
