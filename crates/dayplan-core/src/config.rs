//! TOML-based application configuration.
//!
//! Stores driver preferences:
//! - Cadence of the countdown, idle nudge, and chained advancement
//! - Notification preferences (terminal + desktop channel)
//!
//! Configuration is stored at `~/.config/dayplan/config.toml`. Planner
//! state is never persisted; only these settings are.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Timer cadence in seconds. The countdown is deliberately accelerated:
/// each tick burns one whole activity minute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CadenceConfig {
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
    #[serde(default = "default_idle_nudge_secs")]
    pub idle_nudge_secs: u64,
    #[serde(default = "default_advance_delay_secs")]
    pub advance_delay_secs: u64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
            idle_nudge_secs: default_idle_nudge_secs(),
            advance_delay_secs: default_advance_delay_secs(),
        }
    }
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Best-effort desktop channel on top of the terminal sink.
    #[serde(default = "default_true")]
    pub desktop: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            desktop: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub cadence: CadenceConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl Config {
    /// Load from the config file, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let raw =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Returns `~/.config/dayplan[-dev]/config.toml` based on DAYPLAN_ENV.
///
/// Set DAYPLAN_ENV=dev to use a development config directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYPLAN_ENV").unwrap_or_else(|_| "production".to_string());
    let dir = if env == "dev" {
        base_dir.join("dayplan-dev")
    } else {
        base_dir.join("dayplan")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir.join("config.toml"))
}

fn default_tick_secs() -> u64 {
    10
}

fn default_idle_nudge_secs() -> u64 {
    30
}

fn default_advance_delay_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_demo_cadence() {
        let config = Config::default();
        assert_eq!(config.cadence.tick_secs, 10);
        assert_eq!(config.cadence.idle_nudge_secs, 30);
        assert_eq!(config.cadence.advance_delay_secs, 3);
        assert!(config.notifications.enabled);
        assert!(config.notifications.desktop);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.cadence.tick_secs = 1;
        config.notifications.desktop = false;
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cadence]\ntick_secs = 2\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.cadence.tick_secs, 2);
        assert_eq!(config.cadence.idle_nudge_secs, 30);
        assert!(config.notifications.enabled);
    }
}
