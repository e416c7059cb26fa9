//! Application state

use super::Dispatcher;
use crate::config::{Action, Config};
use crate::page::{ElementId, Page};
use crate::popup::{PopupState, STATE_ATTRIBUTE};
use crate::toggle::{BindError, PopupToggle};

/// Elements a registered popup toggle is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleTargets {
    /// The control whose clicks flip the popup
    pub trigger: ElementId,
    /// The popup element
    pub popup: ElementId,
}

/// Bind the popup toggle described by `config` and register it on its trigger.
///
/// The dispatcher takes the toggle; only its element handles come back.
/// Nothing is registered when binding fails.
///
/// # Errors
///
/// Returns a [`BindError`] if a selector is malformed or matches no element.
/// The error is also logged.
pub fn install_popup_toggle(
    dispatcher: &mut Dispatcher,
    page: &mut Page,
    config: &Config,
) -> Result<ToggleTargets, BindError> {
    let toggle = PopupToggle::bind_selectors(
        page,
        &config.trigger_selector,
        &config.popup_selector,
        config.unknown_state,
    )
    .inspect_err(|e| tracing::error!(error = %e, "Failed to bind share popup"))?;

    let targets = ToggleTargets {
        trigger: toggle.trigger(),
        popup: toggle.popup(),
    };
    dispatcher.add_listener(targets.trigger, toggle);
    Ok(targets)
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Elements on screen
    pub page: Page,

    /// Click listeners
    dispatcher: Dispatcher,

    /// The share button
    trigger: ElementId,

    /// The share popup
    popup: ElementId,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create an application over `page`, binding the share toggle.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if the toggle cannot be bound; the
    /// application refuses to start without its trigger and popup.
    pub fn new(config: Config, mut page: Page) -> Result<Self, BindError> {
        let mut dispatcher = Dispatcher::new();
        let targets = install_popup_toggle(&mut dispatcher, &mut page, &config)?;

        Ok(Self {
            config,
            page,
            dispatcher,
            trigger: targets.trigger,
            popup: targets.popup,
            should_quit: false,
            status_message: None,
        })
    }

    /// Create an application over the default share page
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if the configured selectors do not match the
    /// share page.
    pub fn with_share_page(config: Config) -> Result<Self, BindError> {
        let page = Page::share_page(&config.button_label, &config.popup_title);
        Self::new(config, page)
    }

    /// The trigger element
    #[must_use]
    pub const fn trigger(&self) -> ElementId {
        self.trigger
    }

    /// The popup element
    #[must_use]
    pub const fn popup(&self) -> ElementId {
        self.popup
    }

    /// Deliver a click to an element; returns the number of listeners that ran
    pub fn click(&mut self, target: ElementId) -> usize {
        self.dispatcher.click(&mut self.page, target)
    }

    /// Click the share button
    pub fn activate(&mut self) {
        self.click(self.trigger);
        if let Some(state) = self.popup_state() {
            self.set_status(format!("Share popup {state}"));
        }
    }

    /// Current popup state as projected onto its element
    #[must_use]
    pub fn popup_state(&self) -> Option<PopupState> {
        self.page
            .attribute(self.popup, STATE_ATTRIBUTE)
            .and_then(|raw| raw.parse().ok())
    }

    /// Check if the popup is shown
    #[must_use]
    pub fn popup_visible(&self) -> bool {
        self.popup_state().is_some_and(PopupState::is_active)
    }

    /// Run a keybinding action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Activate => self.activate(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Set a status message to display
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the current status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
