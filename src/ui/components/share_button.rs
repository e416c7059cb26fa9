//! Share button widget

use crate::ui::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The clickable share button
#[derive(Debug, Clone, Copy)]
pub struct Widget<'a> {
    label: &'a str,
    pressed: bool,
}

impl<'a> Widget<'a> {
    /// Create a button; `pressed` highlights it while its popup is shown
    #[must_use]
    pub const fn new(label: &'a str, pressed: bool) -> Self {
        Self { label, pressed }
    }

    /// Width needed to show the label inside the border, in terminal columns
    #[must_use]
    pub fn width(&self) -> u16 {
        let label = u16::try_from(Line::from(self.label).width()).unwrap_or(u16::MAX);
        label.saturating_add(4)
    }

    /// Height of the button including its border
    #[must_use]
    pub const fn height() -> u16 {
        3
    }

    /// Convert to a Paragraph widget
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'a> {
        let border = if self.pressed {
            colors::BORDER_ACTIVE
        } else {
            colors::BORDER
        };
        let mut style = Style::default().fg(colors::TEXT_PRIMARY);
        if self.pressed {
            style = style.add_modifier(Modifier::BOLD);
        }

        Paragraph::new(Line::from(Span::styled(self.label, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget as _};

    #[test]
    fn test_width_fits_label() {
        assert_eq!(Widget::new("Share", false).width(), 9);
        assert_eq!(Widget::new("", false).width(), 4);
    }

    #[test]
    fn test_width_counts_wide_characters_as_two_columns() {
        // "share" in Japanese: two double-width characters
        assert_eq!(Widget::new("\u{5171}\u{6709}", false).width(), 8);
    }

    #[test]
    fn test_wide_label_fits_inside_border() {
        let widget = Widget::new("\u{5171}\u{6709}", false);
        let area = Rect::new(0, 0, widget.width(), Widget::height());
        let mut buffer = Buffer::empty(area);

        widget.to_paragraph().render(area, &mut buffer);

        assert_eq!(buffer.cell((0, 1)).map(ratatui::buffer::Cell::symbol), Some("\u{2502}"));
        assert_eq!(
            buffer
                .cell((area.width - 1, 1))
                .map(ratatui::buffer::Cell::symbol),
            Some("\u{2502}")
        );
        let middle: String = (1..area.width - 1)
            .filter_map(|x| buffer.cell((x, 1)).map(ratatui::buffer::Cell::symbol))
            .collect();
        assert!(middle.contains('\u{5171}'));
        assert!(middle.contains('\u{6709}'));
    }

    #[test]
    fn test_renders_label() {
        let widget = Widget::new("Share", false);
        let area = Rect::new(0, 0, widget.width(), Widget::height());
        let mut buffer = Buffer::empty(area);

        widget.to_paragraph().render(area, &mut buffer);

        let middle: String = (0..area.width)
            .filter_map(|x| buffer.cell((x, 1)).map(ratatui::buffer::Cell::symbol))
            .collect();
        assert!(middle.contains("Share"));
    }

    #[test]
    fn test_pressed_uses_active_border() {
        let widget = Widget::new("Share", true);
        let area = Rect::new(0, 0, widget.width(), Widget::height());
        let mut buffer = Buffer::empty(area);

        widget.to_paragraph().render(area, &mut buffer);

        assert_eq!(
            buffer.cell((0, 0)).map(|c| c.fg),
            Some(colors::BORDER_ACTIVE)
        );
    }
}
