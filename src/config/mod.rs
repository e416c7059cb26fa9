//! Configuration management for sharepop

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::page::{SHARE_BUTTON_CLASS, SHARE_POPUP_CLASS};
use crate::popup::UnknownStatePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A destination listed inside the share popup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareLink {
    /// Text shown in the popup
    pub label: String,
    /// Address the link points to
    pub url: String,
}

impl ShareLink {
    /// Create a link
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Selector of the control that toggles the popup
    #[serde(default = "default_trigger_selector")]
    pub trigger_selector: String,

    /// Selector of the popup element
    #[serde(default = "default_popup_selector")]
    pub popup_selector: String,

    /// How an absent or unrecognized initial popup state is read
    #[serde(default)]
    pub unknown_state: UnknownStatePolicy,

    /// Label of the share button
    #[serde(default = "default_button_label")]
    pub button_label: String,

    /// Title of the share popup
    #[serde(default = "default_popup_title")]
    pub popup_title: String,

    /// Links listed in the popup
    #[serde(default = "default_links")]
    pub links: Vec<ShareLink>,

    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_trigger_selector() -> String {
    format!(".{SHARE_BUTTON_CLASS}")
}

fn default_popup_selector() -> String {
    format!(".{SHARE_POPUP_CLASS}")
}

fn default_button_label() -> String {
    "Share".to_string()
}

fn default_popup_title() -> String {
    "Share this page".to_string()
}

fn default_links() -> Vec<ShareLink> {
    vec![
        ShareLink::new("Email", "mailto:?subject=Have%20a%20look"),
        ShareLink::new("Mastodon", "https://mastodon.social/share"),
        ShareLink::new("Copy link", "about:blank"),
    ]
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger_selector: default_trigger_selector(),
            popup_selector: default_popup_selector(),
            unknown_state: UnknownStatePolicy::default(),
            button_label: default_button_label(),
            popup_title: default_popup_title(),
            links: default_links(),
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.keys.merge_defaults();
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sharepop")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.trigger_selector, ".js-shareBtn");
        assert_eq!(config.popup_selector, ".js-sharePopup");
        assert_eq!(config.unknown_state, UnknownStatePolicy::Closed);
        assert_eq!(config.button_label, "Share");
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.links.len(), 3);
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.json");

        let config = Config {
            trigger_selector: "#open".to_string(),
            popup_selector: "dialog".to_string(),
            unknown_state: UnknownStatePolicy::Active,
            button_label: "Send".to_string(),
            popup_title: "Send to".to_string(),
            links: vec![ShareLink::new("Home", "https://example.org")],
            poll_interval_ms: 250,
            keys: KeyBindings::default(),
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_fails() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_mentions_path() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json")?;

        let err = Config::load_from(&config_path).err().map(|e| e.to_string());
        assert!(err.is_some_and(|msg| msg.contains("Failed to parse config")));
        Ok(())
    }

    #[test]
    fn test_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let json = r##"{"popup_selector": "#share", "unknown_state": "active"}"##;
        let config: Config = serde_json::from_str(json)?;

        assert_eq!(config.popup_selector, "#share");
        assert_eq!(config.unknown_state, UnknownStatePolicy::Active);
        assert_eq!(config.trigger_selector, ".js-shareBtn");
        assert_eq!(config.links, default_links());
        Ok(())
    }

    #[test]
    fn test_load_merges_default_keys() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"keys": {"bindings": {"t": "activate"}}}"#)?;

        let config = Config::load_from(&config_path)?;
        let keys_t = config.keys.keys_for_action(Action::Activate);
        assert!(keys_t.contains(&"t".to_string()));
        assert!(keys_t.contains(&"Enter".to_string()));
        Ok(())
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.ends_with("sharepop/config.json"));
    }
}
