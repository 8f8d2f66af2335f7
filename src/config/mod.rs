// SPDX-License-Identifier: MPL-2.0
//! This module handles the demo application's configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[banner]` - Screen edge, auto-dismiss delay and haptics
//! - `[window]` - Size and safe-area insets of the simulated screen
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_BANNER_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config::{self, BannerPosition};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.banner.position = Some(BannerPosition::Bottom);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{DismissDelay, Environment, Insets, Position, Size};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedBanner";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BANNER_CONFIG_DIR";

// =============================================================================
// Enums
// =============================================================================

/// Screen edge as written in the settings file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BannerPosition {
    #[default]
    Top,
    Bottom,
}

impl From<BannerPosition> for Position {
    fn from(position: BannerPosition) -> Self {
        match position {
            BannerPosition::Top => Position::Top,
            BannerPosition::Bottom => Position::Bottom,
        }
    }
}

impl std::str::FromStr for BannerPosition {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "top" => Ok(BannerPosition::Top),
            "bottom" => Ok(BannerPosition::Bottom),
            other => Err(Error::Config(format!("invalid banner position: {other}"))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Banner behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Screen edge the banner slides in from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BannerPosition>,

    /// Auto-dismiss delay in seconds; absent means manual dismiss only.
    #[serde(
        default = "default_dismiss_after_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_after_secs: Option<f32>,

    /// Whether to play a haptic pulse when the banner shakes.
    #[serde(default = "default_haptics", skip_serializing_if = "Option::is_none")]
    pub haptics: Option<bool>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            position: Some(BannerPosition::default()),
            dismiss_after_secs: default_dismiss_after_secs(),
            haptics: default_haptics(),
        }
    }
}

impl BannerConfig {
    /// Configured auto-dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<DismissDelay> {
        self.dismiss_after_secs.map(clamp_dismiss_after)
    }
}

/// Converts seconds to a delay within the supported auto-dismiss range.
///
/// Shared by the settings file and the command line. NaN falls back to the
/// default delay.
#[must_use]
pub fn clamp_dismiss_after(secs: f32) -> DismissDelay {
    let secs = if secs.is_nan() {
        DEFAULT_DISMISS_AFTER_SECS
    } else {
        secs.clamp(MIN_DISMISS_AFTER_SECS, MAX_DISMISS_AFTER_SECS)
    };
    DismissDelay::from_secs(secs)
}

/// Simulated screen of the demo window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_safe_area_top")]
    pub safe_area_top: f32,
    #[serde(default = "default_safe_area_bottom")]
    pub safe_area_bottom: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            safe_area_top: DEFAULT_SAFE_AREA_TOP,
            safe_area_bottom: DEFAULT_SAFE_AREA_BOTTOM,
        }
    }
}

impl WindowConfig {
    #[must_use]
    pub fn safe_area(&self) -> Insets {
        Insets::new(self.safe_area_top, self.safe_area_bottom)
    }

    /// Environment of the configured screen before the first resize event.
    #[must_use]
    pub fn environment(&self) -> Environment {
        Environment::from_bounds(Size::new(self.width, self.height), self.safe_area())
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_dismiss_after_secs() -> Option<f32> {
    Some(DEFAULT_DISMISS_AFTER_SECS)
}

fn default_haptics() -> Option<bool> {
    Some(true)
}

fn default_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}

fn default_safe_area_top() -> f32 {
    DEFAULT_SAFE_AREA_TOP
}

fn default_safe_area_bottom() -> f32 {
    DEFAULT_SAFE_AREA_BOTTOM
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment
/// variable, then the platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                        Some(format!("could not load {}: {err}", path.display())),
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
// Save Functions
// =============================================================================

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
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            banner: BannerConfig {
                position: Some(BannerPosition::Bottom),
                dismiss_after_secs: Some(5.0),
                haptics: Some(false),
            },
            window: WindowConfig {
                width: 844.0,
                height: 390.0,
                safe_area_top: 0.0,
                safe_area_bottom: 21.0,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write file");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[banner]\nposition = \"bottom\"\n").expect("failed to write file");

        let loaded = load_from_path(&path).expect("partial config should load");
        assert_eq!(loaded.banner.position, Some(BannerPosition::Bottom));
        assert_eq!(loaded.banner.dismiss_after_secs, Some(DEFAULT_DISMISS_AFTER_SECS));
        assert_eq!(loaded.window, WindowConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[banner\nbroken")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.banner.haptics = Some(false);

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.banner.haptics, Some(false));
    }

    #[test]
    fn dismiss_after_is_clamped() {
        let mut banner = BannerConfig::default();
        banner.dismiss_after_secs = Some(600.0);
        assert_eq!(
            banner.dismiss_after().map(DismissDelay::as_secs),
            Some(MAX_DISMISS_AFTER_SECS)
        );

        banner.dismiss_after_secs = None;
        assert!(banner.dismiss_after().is_none());
    }

    #[test]
    fn clamp_dismiss_after_covers_out_of_range_input() {
        assert_eq!(clamp_dismiss_after(0.0).as_secs(), MIN_DISMISS_AFTER_SECS);
        assert_eq!(clamp_dismiss_after(-3.0).as_secs(), MIN_DISMISS_AFTER_SECS);
        assert_eq!(clamp_dismiss_after(1e30).as_secs(), MAX_DISMISS_AFTER_SECS);
        assert_eq!(clamp_dismiss_after(f32::NAN).as_secs(), DEFAULT_DISMISS_AFTER_SECS);
        assert_eq!(clamp_dismiss_after(2.5).as_secs(), 2.5);
    }

    #[test]
    fn banner_position_parses_case_insensitively() {
        assert_eq!("Top".parse::<BannerPosition>().ok(), Some(BannerPosition::Top));
        assert_eq!("BOTTOM".parse::<BannerPosition>().ok(), Some(BannerPosition::Bottom));
        assert!("left".parse::<BannerPosition>().is_err());
    }

    #[test]
    fn default_window_environment_is_portrait() {
        let env = WindowConfig::default().environment();
        assert_eq!(env.orientation, Some(crate::domain::Orientation::Portrait));
        assert_eq!(env.safe_area, Insets::new(DEFAULT_SAFE_AREA_TOP, DEFAULT_SAFE_AREA_BOTTOM));
    }
}
