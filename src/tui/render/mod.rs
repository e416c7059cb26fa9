//! Rendering: share button, popup, status bar
//!
//! [`layout`] is shared with mouse handling so a click lands on exactly the
//! rectangle that was drawn.

use crate::app::App;
use crate::ui::{ShareButtonWidget, SharePopupWidget, StatusBarWidget};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
};

/// Screen areas of the widgets for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// The share button
    pub button: Rect,
    /// The popup, when it is shown
    pub popup: Option<Rect>,
    /// The bottom status line
    pub status: Rect,
}

/// Create a centered rect with percentage width and absolute height
#[must_use]
pub fn centered_rect_absolute(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical_padding = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Length(height),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Compute where each widget goes for the current state
#[must_use]
pub fn layout(app: &App, frame_area: Rect) -> Areas {
    let main_area = Rect {
        height: frame_area.height.saturating_sub(1),
        ..frame_area
    };
    let status = Rect {
        y: frame_area.y.saturating_add(main_area.height),
        height: frame_area.height.min(1),
        ..frame_area
    };

    let button_widget = ShareButtonWidget::new(button_label(app), app.popup_visible());
    let button = Rect {
        x: main_area.x.saturating_add(1),
        y: main_area.y.saturating_add(1),
        width: button_widget.width(),
        height: ShareButtonWidget::height(),
    }
    .intersection(main_area);

    let popup = app.popup_visible().then(|| {
        let widget = SharePopupWidget::new(popup_title(app), &app.config.links);
        centered_rect_absolute(60, widget.height(), main_area)
    });

    Areas {
        button,
        popup,
        status,
    }
}

fn button_label(app: &App) -> &str {
    app.page
        .get(app.trigger())
        .map_or(app.config.button_label.as_str(), |element| element.text())
}

fn popup_title(app: &App) -> &str {
    app.page
        .get(app.popup())
        .map_or(app.config.popup_title.as_str(), |element| element.text())
}

/// Render the whole screen
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let areas = layout(app, frame.area());

    let button = ShareButtonWidget::new(button_label(app), app.popup_visible());
    frame.render_widget(button.to_paragraph(), areas.button);

    if let Some(area) = areas.popup {
        let popup = SharePopupWidget::new(popup_title(app), &app.config.links);
        frame.render_widget(Clear, area);
        frame.render_widget(popup.to_paragraph(), area);
    }

    let status = app.status_message.as_ref().map_or_else(
        || StatusBarWidget::hints(app.config.keys.status_hints()),
        StatusBarWidget::status,
    );
    frame.render_widget(status.to_paragraph(), areas.status);
}
