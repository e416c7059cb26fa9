//! Share popup widget

use crate::config::ShareLink;
use crate::ui::colors;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The popup listing share destinations
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    title: &'a str,
    links: &'a [ShareLink],
}

impl<'a> Widget<'a> {
    /// Create a popup over the configured links
    #[must_use]
    pub const fn new(title: &'a str, links: &'a [ShareLink]) -> Self {
        Self { title, links }
    }

    /// Height of the popup including border and padding
    #[must_use]
    pub fn height(&self) -> u16 {
        let rows = if self.links.is_empty() {
            1
        } else {
            self.links.len()
        };
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4)
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'a> {
        let mut lines: Vec<Line<'a>> = vec![Line::from("")];

        if self.links.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Nothing to share",
                Style::default().fg(colors::TEXT_MUTED),
            )));
        }
        for link in self.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}", link.label),
                    Style::default()
                        .fg(colors::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", link.url),
                    Style::default().fg(colors::TEXT_DIM),
                ),
            ]));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors::BORDER_ACTIVE)),
            )
            .style(Style::default().bg(colors::MODAL_BG))
    }
}
