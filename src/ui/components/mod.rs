//! Individual widgets

pub mod share_button;
pub mod share_popup;
pub mod status_bar;
