//! Terminal event polling

use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent,
};
use std::time::Duration;

/// Events the run loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing happened within one tick
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl Event {
    /// Translate a crossterm event.
    ///
    /// Key releases and repeats become ticks so one physical press activates
    /// exactly once on terminals that report both edges.
    #[must_use]
    pub fn from_crossterm(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => Self::Resize(w, h),
            _ => Self::Tick,
        }
    }
}

/// Polls the terminal for events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling or reading the terminal fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(Event::from_crossterm(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(100)
    }
}
