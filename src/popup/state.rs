//! Popup state definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Visibility state of a popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PopupState {
    /// Popup is hidden
    #[default]
    Closed,
    /// Popup is shown
    Active,
}

impl PopupState {
    /// Both states, closed first
    pub const ALL: [Self; 2] = [Self::Closed, Self::Active];

    /// The state one activation leads to
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Active,
            Self::Active => Self::Closed,
        }
    }

    /// Check if the popup is shown
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Attribute value used when projecting onto an element
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for PopupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is neither `closed` nor `active`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized popup state: {0:?} (expected \"closed\" or \"active\")")]
pub struct ParseStateError(pub String);

impl FromStr for PopupState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closed" => Ok(Self::Closed),
            "active" => Ok(Self::Active),
            other => Err(ParseStateError(other.to_string())),
        }
    }
}

/// How an absent or unrecognized `data-state` value is read at bind time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownStatePolicy {
    /// Treat the popup as hidden; the first activation opens it
    #[default]
    Closed,
    /// Anything other than `closed` counts as open; the first activation closes it
    Active,
}

impl UnknownStatePolicy {
    /// State assumed for an unrecognized value
    #[must_use]
    pub const fn fallback(self) -> PopupState {
        match self {
            Self::Closed => PopupState::Closed,
            Self::Active => PopupState::Active,
        }
    }

    /// Resolve a raw attribute value into a state.
    ///
    /// Returns the state and whether the raw value was recognized.
    #[must_use]
    pub fn resolve(self, raw: Option<&str>) -> (PopupState, bool) {
        match raw.map(str::parse::<PopupState>) {
            Some(Ok(state)) => (state, true),
            Some(Err(_)) | None => (self.fallback(), false),
        }
    }
}
