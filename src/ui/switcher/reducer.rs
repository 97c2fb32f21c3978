use crate::ui::mvi::Reducer;
use crate::ui::switcher::intent::SwitcherIntent;
use crate::ui::switcher::state::SwitcherState;

pub struct SwitcherReducer;

impl Reducer for SwitcherReducer {
    type State = SwitcherState;
    type Intent = SwitcherIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SwitcherIntent::Next { options } => {
                if options == 0 {
                    return SwitcherState::default();
                }
                let focused = state.focused.min(options - 1);
                SwitcherState {
                    focused: if focused + 1 >= options { 0 } else { focused + 1 },
                }
            }
            SwitcherIntent::Previous { options } => {
                if options == 0 {
                    return SwitcherState::default();
                }
                let focused = state.focused.min(options - 1);
                SwitcherState {
                    focused: if focused == 0 { options - 1 } else { focused - 1 },
                }
            }
            SwitcherIntent::Select { index, options } => {
                if index < options {
                    SwitcherState { focused: index }
                } else {
                    state
                }
            }
            SwitcherIntent::Reset => SwitcherState::default(),
        }
    }
}
