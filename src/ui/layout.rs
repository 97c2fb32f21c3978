use ratatui::layout::Rect;

use crate::ui::logo::logo_height;

/// Footer is a single bordered line.
const FOOTER_HEIGHT: u16 = 3;

/// Header fits the logo plus its top and bottom border.
pub fn header_height() -> u16 {
    logo_height() + 2
}

/// Splits the screen into header, main and footer regions.
///
/// The body shrinks first when the terminal is too small, then the footer;
/// the header keeps its height longest.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(header_height());
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the header into the logo column and the title column.
pub fn header_columns(header: Rect, logo_width: u16) -> (Rect, Rect) {
    let logo_width = logo_width.saturating_add(2).min(header.width);
    let logo = Rect {
        x: header.x,
        y: header.y,
        width: logo_width,
        height: header.height,
    };
    let title = Rect {
        x: header.x + logo_width,
        y: header.y,
        width: header.width.saturating_sub(logo_width),
        height: header.height,
    };
    (logo, title)
}
