//! Simple element selectors (`.class`, `#id`, `name`)

use super::Element;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a selector string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The selector was empty or only whitespace
    #[error("empty selector")]
    Empty,
    /// A `.` or `#` prefix with nothing after it
    #[error("selector {0:?} has no name after its prefix")]
    MissingName(String),
    /// Whitespace, combinators or other unsupported characters
    #[error("unsupported selector {0:?}: only a single .class, #id or name is allowed")]
    Unsupported(String),
}

/// A single simple selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Matches elements carrying the class
    Class(String),
    /// Matches the element whose `id` attribute equals the value
    Id(String),
    /// Matches elements with this name
    Name(String),
}

impl Selector {
    /// Check whether an element matches
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.attribute("id") == Some(id.as_str()),
            Self::Name(name) => element.name() == name,
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let (prefix, rest) = match trimmed.chars().next() {
            Some(prefix @ ('.' | '#')) => (Some(prefix), &trimmed[1..]),
            _ => (None, trimmed),
        };

        if rest.is_empty() {
            return Err(SelectorError::MissingName(trimmed.to_string()));
        }
        if !rest.chars().all(is_ident_char) {
            return Err(SelectorError::Unsupported(trimmed.to_string()));
        }

        let name = rest.to_string();
        Ok(match prefix {
            Some('.') => Self::Class(name),
            Some(_) => Self::Id(name),
            None => Self::Name(name),
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}
