//! Layout calculations for the UI

use ratatui::layout::Rect;

/// Largest width the step content is stretched to
const MAX_CONTENT_WIDTH: u16 = 90;

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Horizontally centred content column with side padding
pub fn content_area(area: Rect) -> Rect {
    let padded = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    let width = padded.width.min(MAX_CONTENT_WIDTH);
    Rect::new(
        padded.x + (padded.width - width) / 2,
        padded.y,
        width,
        padded.height,
    )
}
