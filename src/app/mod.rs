//! Application state and event plumbing

mod dispatch;
mod event;
mod state;

pub use dispatch::{Dispatcher, Listener};
pub use event::{Event, Handler};
pub use state::{App, ToggleTargets, install_popup_toggle};
