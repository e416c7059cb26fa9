//! Keyboard and mouse input

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key press.
///
/// Any key clears a stale status message; bound keys then run their action.
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.clear_status();
    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        tracing::debug!(?action, "Key action");
        app.handle_action(action);
    }
}
