// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use postboard::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//! config.toasts.error_duration_ms = 8000;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::{
    DEFAULT_CONTAINER_ID, DEFAULT_ERROR_DURATION_MS, DEFAULT_EXIT_ANIMATION_MS,
    DEFAULT_INFO_DURATION_MS, DEFAULT_SHOW_DURATION_MS, DEFAULT_SUCCESS_DURATION_MS,
    DEFAULT_WARNING_DURATION_MS, MAX_EXIT_ANIMATION_MS, MAX_TOAST_DURATION_MS,
    MIN_EXIT_ANIMATION_MS,
};

use crate::domain::ui::{AnimationGrace, DisplayDuration};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Postboard";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub toasts: ToastSettings,
}

/// Toast timing and placement preferences.
///
/// Durations are stored in milliseconds as the user wrote them. A value of
/// zero or below means "stay until closed"; accessors clamp everything else
/// into the supported range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
    pub container_id: String,
    pub default_duration_ms: i64,
    pub success_duration_ms: i64,
    pub info_duration_ms: i64,
    pub warning_duration_ms: i64,
    pub error_duration_ms: i64,
    pub exit_animation_ms: u64,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            default_duration_ms: DEFAULT_SHOW_DURATION_MS,
            success_duration_ms: DEFAULT_SUCCESS_DURATION_MS,
            info_duration_ms: DEFAULT_INFO_DURATION_MS,
            warning_duration_ms: DEFAULT_WARNING_DURATION_MS,
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
            exit_animation_ms: DEFAULT_EXIT_ANIMATION_MS,
        }
    }
}

impl ToastSettings {
    /// Returns the container id, falling back to the default when blank.
    #[must_use]
    pub fn container_id(&self) -> &str {
        let trimmed = self.container_id.trim();
        if trimmed.is_empty() {
            DEFAULT_CONTAINER_ID
        } else {
            trimmed
        }
    }

    #[must_use]
    pub fn default_duration(&self) -> DisplayDuration {
        DisplayDuration::new(self.default_duration_ms)
    }

    #[must_use]
    pub fn success_duration(&self) -> DisplayDuration {
        DisplayDuration::new(self.success_duration_ms)
    }

    #[must_use]
    pub fn info_duration(&self) -> DisplayDuration {
        DisplayDuration::new(self.info_duration_ms)
    }

    #[must_use]
    pub fn warning_duration(&self) -> DisplayDuration {
        DisplayDuration::new(self.warning_duration_ms)
    }

    #[must_use]
    pub fn error_duration(&self) -> DisplayDuration {
        DisplayDuration::new(self.error_duration_ms)
    }

    /// Returns the grace period between the hiding mark and detachment.
    #[must_use]
    pub fn exit_animation(&self) -> AnimationGrace {
        AnimationGrace::new(self.exit_animation_ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
