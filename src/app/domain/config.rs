use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

/// What to draw in place of a hidden profile picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementType {
    /// Up to two initials taken from the contact name
    #[default]
    Initials,
    /// A fixed glyph, identical for every contact
    Abstract,
    /// Nothing; only the gradient background remains
    Empty,
}

impl ReplacementType {
    /// Name used in the configuration file and the injected script
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initials => "initials",
            Self::Abstract => "abstract",
            Self::Empty => "empty",
        }
    }
}

/// Options controlling which customizations are applied to the page.
///
/// Field names on disk are camelCase (`showProfilePics`, `replacementType`, ...).
/// Any key missing from the file takes its individual default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default = "default_show_profile_pics")]
    pub show_profile_pics: bool,

    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,

    #[serde(default = "default_show_read_receipts")]
    pub show_read_receipts: bool,

    #[serde(default = "default_enable_notifications")]
    pub enable_notifications: bool,

    /// Initial state of the floating focus toggle
    #[serde(default = "default_focus_mode")]
    pub focus_mode: bool,

    #[serde(default)]
    pub replacement_type: ReplacementType,
}

fn default_show_profile_pics() -> bool {
    false
}

fn default_show_timestamps() -> bool {
    true
}

fn default_show_read_receipts() -> bool {
    false
}

fn default_enable_notifications() -> bool {
    true
}

fn default_focus_mode() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            show_profile_pics: default_show_profile_pics(),
            show_timestamps: default_show_timestamps(),
            show_read_receipts: default_show_read_receipts(),
            enable_notifications: default_enable_notifications(),
            focus_mode: default_focus_mode(),
            replacement_type: ReplacementType::default(),
        }
    }
}

impl Configuration {
    /// Parse a configuration from JSON text.
    pub fn parse(contents: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Write the configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("focuschat");
        path.push("config.json");
        path
    }
}
