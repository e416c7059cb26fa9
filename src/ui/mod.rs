//! UI components for the TUI
//!
//! Widgets here only turn state into ratatui paragraphs. Layout and input
//! live in the `tui` module.

pub mod colors;
mod components;

pub use components::{
    share_button::Widget as ShareButtonWidget, share_popup::Widget as SharePopupWidget,
    status_bar::Widget as StatusBarWidget,
};
