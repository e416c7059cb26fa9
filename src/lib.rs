//! sharepop - a share popup for the terminal
//!
//! A Share button and a popup whose state flips between `closed` and
//! `active` every time the button is activated, by mouse click or key.
//! The popup's state lives on a [`popup::PopupView`] and is projected onto the
//! popup element's `data-state` attribute, which the renderer reads.

pub mod app;
pub mod config;
pub mod page;
pub mod popup;
pub mod toggle;
pub mod tui;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use popup::PopupState;
pub use toggle::{MissingTargetError, PopupToggle};
