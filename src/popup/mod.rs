//! Popup state and the view-model that owns it

mod state;
mod view;

pub use state::{ParseStateError, PopupState, UnknownStatePolicy};
pub use view::{PopupView, STATE_ATTRIBUTE};
