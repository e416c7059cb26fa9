//! Click-to-toggle binding between a trigger control and a popup

use crate::app::Listener;
use crate::page::{ElementId, Page, Selector, SelectorError};
use crate::popup::{PopupState, PopupView, STATE_ATTRIBUTE, UnknownStatePolicy};
use std::fmt;
use thiserror::Error;

/// Which collaborator of the toggle an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRole {
    /// The control whose activation flips the popup
    Trigger,
    /// The element whose state is flipped
    Popup,
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trigger => "trigger",
            Self::Popup => "popup",
        };
        f.write_str(s)
    }
}

/// A collaborator could not be located when binding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{role} element not found for selector {selector}")]
pub struct MissingTargetError {
    /// Which collaborator is missing
    pub role: TargetRole,
    /// Selector that matched nothing
    pub selector: Selector,
}

/// Errors from binding with selector strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A selector string could not be parsed
    #[error("invalid {role} selector: {source}")]
    Selector {
        /// Which collaborator the selector was for
        role: TargetRole,
        /// Parse failure
        source: SelectorError,
    },
    /// A selector matched nothing
    #[error(transparent)]
    MissingTarget(#[from] MissingTargetError),
}

/// Flips a popup between closed and active whenever its trigger is activated
///
/// The toggle owns the popup's state, so it is neither `Clone` nor `Copy`:
/// once registered as a listener there is exactly one copy of that state.
#[expect(
    missing_copy_implementations,
    reason = "a copy would be a second owner of the popup state"
)]
#[derive(Debug, PartialEq, Eq)]
pub struct PopupToggle {
    trigger: ElementId,
    view: PopupView,
}

impl PopupToggle {
    /// Locate both collaborators and take ownership of the popup's state.
    ///
    /// The popup's current `data-state` is read once, resolved with `policy`
    /// when absent or unrecognized, and written back normalized.
    ///
    /// # Errors
    ///
    /// Returns [`MissingTargetError`] if the trigger or the popup matches no
    /// element. The trigger is checked first.
    pub fn bind(
        page: &mut Page,
        trigger: &Selector,
        popup: &Selector,
        policy: UnknownStatePolicy,
    ) -> Result<Self, MissingTargetError> {
        let trigger_id = page
            .query_selector(trigger)
            .ok_or_else(|| MissingTargetError {
                role: TargetRole::Trigger,
                selector: trigger.clone(),
            })?;
        let popup_id = page.query_selector(popup).ok_or_else(|| MissingTargetError {
            role: TargetRole::Popup,
            selector: popup.clone(),
        })?;

        let raw = page.attribute(popup_id, STATE_ATTRIBUTE);
        let (state, recognized) = policy.resolve(raw);
        if !recognized {
            tracing::warn!(
                selector = %popup,
                value = ?raw,
                resolved = %state,
                "Unrecognized popup state, normalizing"
            );
        }

        let view = PopupView::new(popup_id, state);
        view.project(page);

        tracing::info!(%trigger, %popup, %state, "Bound popup toggle");
        Ok(Self {
            trigger: trigger_id,
            view,
        })
    }

    /// Parse both selectors, then [`bind`](Self::bind).
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Selector`] for a malformed selector and
    /// [`BindError::MissingTarget`] if an element cannot be located.
    pub fn bind_selectors(
        page: &mut Page,
        trigger: &str,
        popup: &str,
        policy: UnknownStatePolicy,
    ) -> Result<Self, BindError> {
        let trigger: Selector = trigger.parse().map_err(|source| BindError::Selector {
            role: TargetRole::Trigger,
            source,
        })?;
        let popup: Selector = popup.parse().map_err(|source| BindError::Selector {
            role: TargetRole::Popup,
            source,
        })?;
        Ok(Self::bind(page, &trigger, &popup, policy)?)
    }

    /// Handle one activation of the trigger: flip the state and project it
    pub fn on_activate(&mut self, page: &mut Page) -> PopupState {
        let state = self.view.flip();
        self.view.project(page);
        tracing::debug!(%state, "Popup toggled");
        state
    }

    /// The trigger element
    #[must_use]
    pub const fn trigger(&self) -> ElementId {
        self.trigger
    }

    /// The popup element
    #[must_use]
    pub const fn popup(&self) -> ElementId {
        self.view.element()
    }

    /// Current popup state
    #[must_use]
    pub const fn state(&self) -> PopupState {
        self.view.state()
    }
}

impl Listener for PopupToggle {
    fn handle(&mut self, page: &mut Page) {
        self.on_activate(page);
    }
}
