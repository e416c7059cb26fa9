//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Activate the share button, as if it were clicked
    Activate,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Activate => "Toggle share popup",
            Self::Quit => "Quit",
        }
    }

    /// Short label for the status bar
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Activate => "share",
            Self::Quit => "quit",
        }
    }

    /// All actions in display order
    pub const ALL: &'static [Self] = &[Self::Activate, Self::Quit];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("Enter".to_string(), Action::Activate);
        bindings.insert(" ".to_string(), Action::Activate);
        bindings.insert("s".to_string(), Action::Activate);
        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("Esc".to_string(), Action::Quit);
        bindings.insert("Ctrl+c".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// Keys the user bound to something else keep their binding.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Format key(s) for an action for display (e.g., "s/Enter/Space")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        let mut keys: Vec<String> = self
            .keys_for_action(action)
            .into_iter()
            .map(|k| if k == " " { "Space".to_string() } else { k })
            .collect();
        // Single characters first, then alphabetical
        keys.sort_by(|a, b| (a.len() > 1, a.as_str()).cmp(&(b.len() > 1, b.as_str())));
        keys.join("/")
    }

    /// Generate status bar hint text, e.g. "[Enter]share [Esc]quit"
    #[must_use]
    pub fn status_hints(&self) -> String {
        Action::ALL
            .iter()
            .filter_map(|&action| {
                let keys = self.format_keys(action);
                let key = keys.split('/').next().filter(|k| !k.is_empty())?;
                Some(format!("[{key}]{}", action.hint()))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    };
    parts.push(key_part);

    parts.join("+")
}
