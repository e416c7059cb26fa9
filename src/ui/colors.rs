//! Color palette for the TUI

use ratatui::style::Color;

/// Border of idle widgets
pub const BORDER: Color = Color::Rgb(100, 110, 130);
/// Border of the button while its popup is shown
pub const BORDER_ACTIVE: Color = Color::Rgb(100, 180, 220);
/// Status bar background
pub const SURFACE: Color = Color::Rgb(50, 55, 70);

/// Main text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
/// Secondary text such as link addresses
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
/// Hints
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

/// Popup background
pub const MODAL_BG: Color = Color::Rgb(25, 27, 35);
/// Status messages
pub const ACCENT_POSITIVE: Color = Color::Rgb(120, 180, 120);
