//! Status bar widget

use crate::ui::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Widget for displaying the status bar
#[derive(Debug)]
pub struct Widget {
    content: StatusContent,
}

/// Content type for the status bar
#[derive(Debug, PartialEq, Eq)]
pub enum StatusContent {
    /// Key hints
    Hints(String),
    /// Status message
    Status(String),
}

impl Widget {
    /// Create a status bar showing key hints
    #[must_use]
    pub fn hints(hints: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Hints(hints.into()),
        }
    }

    /// Create a status bar with a status message
    #[must_use]
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            content: StatusContent::Status(message.into()),
        }
    }

    /// Content shown by this bar
    #[must_use]
    pub const fn content(&self) -> &StatusContent {
        &self.content
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let span = match &self.content {
            StatusContent::Status(msg) => Span::styled(
                format!(" {msg} "),
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            StatusContent::Hints(hints) => {
                Span::styled(format!(" {hints} "), Style::default().fg(colors::TEXT_DIM))
            }
        };

        Paragraph::new(Line::from(span)).style(Style::default().bg(colors::SURFACE))
    }
}
