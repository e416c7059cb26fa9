//! View-model owning a popup's state

use super::PopupState;
use crate::page::{ElementId, Page};

/// Attribute the popup state is projected onto
pub const STATE_ATTRIBUTE: &str = "data-state";

/// Owns the state of one popup element.
///
/// The element's `data-state` attribute is a one-way projection of the
/// field: reads go through the view, and every write is followed by
/// [`PopupView::project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupView {
    element: ElementId,
    state: PopupState,
}

impl PopupView {
    /// Create a view for an element with a known starting state
    #[must_use]
    pub const fn new(element: ElementId, state: PopupState) -> Self {
        Self { element, state }
    }

    /// The element this view projects onto
    #[must_use]
    pub const fn element(&self) -> ElementId {
        self.element
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> PopupState {
        self.state
    }

    /// Flip the state and return the new value
    pub const fn flip(&mut self) -> PopupState {
        self.state = self.state.toggled();
        self.state
    }

    /// Write the current state onto the element's attribute
    pub fn project(&self, page: &mut Page) {
        page.set_attribute(self.element, STATE_ATTRIBUTE, self.state.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    #[test]
    fn test_flip() {
        let mut page = Page::new();
        let id = page.push(Element::new("div"));
        let mut view = PopupView::new(id, PopupState::Closed);

        assert_eq!(view.flip(), PopupState::Active);
        assert_eq!(view.state(), PopupState::Active);
        assert_eq!(view.flip(), PopupState::Closed);
    }

    #[test]
    fn test_project_writes_attribute() {
        let mut page = Page::new();
        let id = page.push(Element::new("div"));
        let view = PopupView::new(id, PopupState::Active);

        assert_eq!(page.attribute(id, STATE_ATTRIBUTE), None);
        view.project(&mut page);
        assert_eq!(page.attribute(id, STATE_ATTRIBUTE), Some("active"));
        assert_eq!(view.element(), id);
    }

    #[test]
    fn test_flip_does_not_project() {
        let mut page = Page::new();
        let id = page.push(Element::new("div").with_attribute(STATE_ATTRIBUTE, "closed"));
        let mut view = PopupView::new(id, PopupState::Closed);

        view.flip();
        assert_eq!(page.attribute(id, STATE_ATTRIBUTE), Some("closed"));
        view.project(&mut page);
        assert_eq!(page.attribute(id, STATE_ATTRIBUTE), Some("active"));
    }
}
