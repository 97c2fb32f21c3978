//! Language switcher: one button per inactive language.

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::SwitcherIntent;
pub use reducer::SwitcherReducer;
pub use state::SwitcherState;
pub use widget::{switcher_options, LanguageSwitcher};
