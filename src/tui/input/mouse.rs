//! Mouse input handling (click-to-activate).

use crate::app::App;
use crate::tui::render;
use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};

/// Handle a mouse event.
///
/// A left click inside the share button is an activation of the button.
/// Every other click is ignored; the popup only changes through its toggle.
/// An open popup is drawn over the button, so clicks on it never reach the
/// button beneath.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let areas = render::layout(app, frame_area);
    if areas
        .popup
        .is_some_and(|popup| rect_contains(popup, mouse.column, mouse.row))
    {
        return;
    }
    if rect_contains(areas.button, mouse.column, mouse.row) {
        tracing::debug!(x = mouse.column, y = mouse.row, "Share button clicked");
        app.clear_status();
        app.activate();
    }
}

const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}
