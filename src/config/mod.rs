// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The app never writes the file; users edit it by hand.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[session]` - Startup authentication check
//! - `[upload]` - Simulated upload timing
//! - `[club]` - Club name, team name and member display defaults
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `CLUB_HUB_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use club_hub::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! let _delay = config.session.auth_check_delay();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Duration of the simulated authentication check at startup.
    #[serde(
        default = "default_auth_check_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auth_check_delay_ms: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_check_delay_ms: default_auth_check_delay_ms(),
        }
    }
}

impl SessionConfig {
    /// Startup check delay, clamped to the supported range.
    #[must_use]
    pub fn auth_check_delay(&self) -> Duration {
        let ms = self
            .auth_check_delay_ms
            .unwrap_or(DEFAULT_AUTH_CHECK_DELAY_MS)
            .clamp(MIN_AUTH_CHECK_DELAY_MS, MAX_AUTH_CHECK_DELAY_MS);
        Duration::from_millis(ms)
    }
}

/// Simulated upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Interval between progress ticks (milliseconds).
    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,

    /// Percentage added per tick.
    #[serde(
        default = "default_progress_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_step: Option<u8>,

    /// Delay before the upload completes (milliseconds).
    #[serde(
        default = "default_completion_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_delay_ms: Option<u64>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: default_progress_interval_ms(),
            progress_step: default_progress_step(),
            completion_delay_ms: default_completion_delay_ms(),
        }
    }
}

impl UploadConfig {
    #[must_use]
    pub fn progress_interval(&self) -> Duration {
        let ms = self
            .progress_interval_ms
            .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS)
            .clamp(MIN_PROGRESS_INTERVAL_MS, MAX_PROGRESS_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn progress_step(&self) -> u8 {
        self.progress_step
            .unwrap_or(DEFAULT_PROGRESS_STEP)
            .clamp(MIN_PROGRESS_STEP, MAX_PROGRESS_STEP)
    }

    #[must_use]
    pub fn completion_delay(&self) -> Duration {
        let ms = self
            .completion_delay_ms
            .unwrap_or(DEFAULT_COMPLETION_DELAY_MS)
            .clamp(MIN_COMPLETION_DELAY_MS, MAX_COMPLETION_DELAY_MS);
        Duration::from_millis(ms)
    }
}

/// Club and member display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubConfig {
    /// Club name shown in the header and splash screen.
    #[serde(default = "default_club_name")]
    pub club_name: String,

    /// Team name shown on the dashboard.
    #[serde(default = "default_team_name")]
    pub team_name: String,

    /// Member name shown on the dashboard.
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// Unread notification count shown on the dashboard bell.
    #[serde(default = "default_notification_count")]
    pub notification_count: u32,
}

impl Default for ClubConfig {
    fn default() -> Self {
        Self {
            club_name: default_club_name(),
            team_name: default_team_name(),
            display_name: default_display_name(),
            notification_count: default_notification_count(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub club: ClubConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_auth_check_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTH_CHECK_DELAY_MS)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
}

fn default_progress_step() -> Option<u8> {
    Some(DEFAULT_PROGRESS_STEP)
}

fn default_completion_delay_ms() -> Option<u64> {
    Some(DEFAULT_COMPLETION_DELAY_MS)
}

fn default_club_name() -> String {
    DEFAULT_CLUB_NAME.to_string()
}

fn default_team_name() -> String {
    DEFAULT_TEAM_NAME.to_string()
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

fn default_notification_count() -> u32 {
    DEFAULT_NOTIFICATION_COUNT
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!("Falling back to default settings: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.session.auth_check_delay(), Duration::from_millis(1500));
        assert_eq!(config.upload.progress_interval(), Duration::from_millis(300));
        assert_eq!(config.upload.progress_step(), 10);
        assert_eq!(config.upload.completion_delay(), Duration::from_millis(3000));
        assert_eq!(config.club.club_name, "FC Champions");
        assert_eq!(config.club.display_name, "John Doe");
    }

    #[test]
    fn serialized_config_loads_back_unchanged() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            session: SessionConfig {
                auth_check_delay_ms: Some(200),
            },
            upload: UploadConfig {
                progress_interval_ms: Some(100),
                progress_step: Some(25),
                completion_delay_ms: Some(400),
            },
            club: ClubConfig {
                club_name: "Rovers".to_string(),
                ..ClubConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        fs::create_dir_all(config_path.parent().expect("has parent")).expect("create dir");
        let content = toml::to_string_pretty(&config).expect("failed to serialize config");
        fs::write(&config_path, content).expect("failed to write config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[upload]\nprogress_step = 20\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.upload.progress_step(), 20);
        assert_eq!(loaded.upload.progress_interval(), Duration::from_millis(300));
        assert_eq!(loaded.club, ClubConfig::default());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let upload = UploadConfig {
            progress_interval_ms: Some(1),
            progress_step: Some(0),
            completion_delay_ms: Some(u64::MAX),
        };
        assert_eq!(
            upload.progress_interval(),
            Duration::from_millis(MIN_PROGRESS_INTERVAL_MS)
        );
        assert_eq!(upload.progress_step(), MIN_PROGRESS_STEP);
        assert_eq!(
            upload.completion_delay(),
            Duration::from_millis(MAX_COMPLETION_DELAY_MS)
        );
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_broken_file_returns_warning_key() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
