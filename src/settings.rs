//! Game settings and preferences
//!
//! Read from a JSON file next to the binary (or wherever `--settings` points).
//! Every field has a default, so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::GravityMode;

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "hollow_vale_settings.json";

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Session ===
    /// Seed for basic enemy placement (same seed = same enemy set)
    pub seed: u64,
    /// Number of basic patrol enemies placed on the level
    pub minion_count: u32,
    /// When gravity acts on the player
    pub gravity: GravityMode,

    // === Assets ===
    /// Directory sprite paths are resolved against
    pub asset_dir: PathBuf,

    // === Accessibility ===
    /// Disable the invulnerability blink
    pub reduced_flicker: bool,

    // === Debug ===
    /// Outline the melee hitbox while a swing is active
    pub show_hitboxes: bool,
    /// Stop the frame driver after this many frames
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 1337,
            minion_count: 3,
            gravity: GravityMode::Continuous,
            asset_dir: PathBuf::from("assets"),
            reduced_flicker: false,
            show_hitboxes: false,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON file
    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Whether the invulnerability blink should be drawn
    pub fn effective_flicker(&self) -> bool {
        !self.reduced_flicker
    }
}
