// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[window]` - Remembered window size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments: use `load_with_override()`/`save_with_override()` with an
//! explicit directory, otherwise the platform config directory is used.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedPortal";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Remembered window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(
        default = "default_window_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

fn default_window_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir.or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, the
/// defaults are returned together with a warning message; a corrupt file
/// never prevents startup.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("settings file ignored: {}", err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
