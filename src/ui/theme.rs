use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SUBTITLE_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const LOGO_COLOR: Color = Color::Rgb(0x61, 0xda, 0xfb);
pub const ACTIVE_LANGUAGE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BUTTON_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
