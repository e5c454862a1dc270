//! Application settings
//!
//! Read once at startup from `settings.json` in the platform config directory.
//! Missing or malformed files fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What happens when a donation is confirmed while confetti is still flying
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Every confirmation runs its own loop alongside the others
    #[default]
    Concurrent,
    /// A new confirmation cancels the loops still running
    Supersede,
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlapPolicy::Concurrent => write!(f, "concurrent"),
            OverlapPolicy::Supersede => write!(f, "supersede"),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Transfer destination shown in the donation modal
    #[serde(default)]
    pub bank: BankAccount,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Confetti behavior
    #[serde(default)]
    pub celebration: CelebrationSettings,
}

/// Bank account the donor transfers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub bank_name: String,
    /// Short account alias used instead of the account number
    pub account_alias: String,
    /// Holder name as printed on the card
    pub holder_name: String,
    /// Holder name as typed into banking apps (no diacritics)
    pub holder_name_plain: String,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    #[serde(default)]
    pub dark_mode: bool,
    /// Interface language code ("vi" or "en")
    #[serde(default = "default_language")]
    pub language: String,
    /// Skip drawing confetti; messages and banners still appear
    #[serde(default)]
    pub reduce_motion: bool,
}

/// Celebration settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CelebrationSettings {
    #[serde(default)]
    pub overlap: OverlapPolicy,
}

fn default_language() -> String {
    "vi".to_string()
}

impl Default for BankAccount {
    fn default() -> Self {
        Self {
            bank_name: "VIETCOMBANK".to_string(),
            account_alias: "ANACE".to_string(),
            holder_name: "VÕ PHẠM TRƯỜNG AN".to_string(),
            holder_name_plain: "VO PHAM TRUONG AN".to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            language: default_language(),
            reduce_motion: false,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("vn", "anace", "NhaTaiTro")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
