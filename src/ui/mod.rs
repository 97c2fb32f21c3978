pub mod app;
pub mod events;
pub mod hello_world;
pub mod input;
pub mod layout;
pub mod logo;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod switcher;
pub mod terminal_guard;
pub mod theme;
