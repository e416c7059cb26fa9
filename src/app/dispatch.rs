//! Click listeners and serialized dispatch

use crate::page::{ElementId, Page};
use std::fmt;

/// Something that reacts to a click on an element
pub trait Listener: fmt::Debug {
    /// Handle one click. Runs to completion before the next event is delivered.
    fn handle(&mut self, page: &mut Page);
}

/// Registry of click listeners keyed by element
#[derive(Debug, Default)]
pub struct Dispatcher {
    listeners: Vec<(ElementId, Box<dyn Listener>)>,
}

impl Dispatcher {
    /// Create a dispatcher with no listeners
    #[must_use]
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a click listener on an element
    pub fn add_listener(&mut self, target: ElementId, listener: impl Listener + 'static) {
        self.listeners.push((target, Box::new(listener)));
    }

    /// Number of registered listeners
    #[must_use]
    pub const fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Check whether any listener is registered on an element
    #[must_use]
    pub fn has_listener(&self, target: ElementId) -> bool {
        self.listeners.iter().any(|(id, _)| *id == target)
    }

    /// Deliver a click to every listener on `target`, in registration order.
    ///
    /// Returns the number of listeners that ran.
    pub fn click(&mut self, page: &mut Page, target: ElementId) -> usize {
        let mut handled = 0;
        for (id, listener) in &mut self.listeners {
            if *id == target {
                listener.handle(page);
                handled += 1;
            }
        }
        tracing::trace!(element = target.index(), handled, "Dispatched click");
        handled
    }
}
