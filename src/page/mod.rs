//! Element model the popup toggle binds against
//!
//! A [`Page`] is an ordered list of [`Element`]s. Each element has a name, a
//! set of classes, a text label and string attributes. Elements are looked up
//! with [`Selector`]s, first match in page order.

mod selector;

pub use selector::{Selector, SelectorError};

use std::collections::BTreeMap;

/// Class carried by the share button
pub const SHARE_BUTTON_CLASS: &str = "js-shareBtn";

/// Class carried by the share popup
pub const SHARE_POPUP_CLASS: &str = "js-sharePopup";

/// Stable handle to an element of a [`Page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of the element in page order
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    classes: Vec<String>,
    text: String,
    attributes: BTreeMap<String, String>,
}

impl Element {
    /// Create an element with the given name and nothing else
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a class
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the text label
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Element name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text label
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether the element carries a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Read an attribute
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Write an attribute
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }
}

/// Ordered collection of elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    /// Create an empty page
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The page the share toggle is built for: a button and a closed popup
    #[must_use]
    pub fn share_page(button_label: &str, popup_title: &str) -> Self {
        let mut page = Self::new();
        page.push(
            Element::new("button")
                .with_class(SHARE_BUTTON_CLASS)
                .with_text(button_label),
        );
        page.push(
            Element::new("div")
                .with_class(SHARE_POPUP_CLASS)
                .with_text(popup_title)
                .with_attribute(crate::popup::STATE_ATTRIBUTE, "closed"),
        );
        page
    }

    /// Append an element and return its handle
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// Number of elements
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the page has no elements
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Get a mutable reference to an element
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// First element in page order matching the selector
    #[must_use]
    pub fn query_selector(&self, selector: &Selector) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| selector.matches(element))
            .map(ElementId)
    }

    /// Read an attribute of an element
    #[must_use]
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id)?.attribute(name)
    }

    /// Write an attribute of an element; unknown handles are ignored
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.set_attribute(name, value);
        }
    }

    /// Iterate over elements with their handles
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(idx, element)| (ElementId(idx), element))
    }
}
