// SPDX-License-Identifier: MPL-2.0
//! This module reads the optional `settings.toml` file that tunes the viewer.
//! The application never writes it; a missing file simply means defaults.
//!
//! # Configuration Sections
//!
//! - `[general]` - Log filter
//! - `[window]` - Initial window size
//! - `[viewer]` - Slider step and theme
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument (see [`init_cli_override`])
//! 3. `PAN_ZOOM_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pan_zoom::config;
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! let (width, height) = config.window_size();
//! assert!(width > 0.0 && height > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PanZoom";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PAN_ZOOM_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` filter directive (e.g. "debug", "pan_zoom=trace").
    #[serde(default)]
    pub log_level: Option<String>,
}

/// Initial window geometry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: Option<f32>,

    #[serde(default = "default_window_height")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Viewer settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Zoom slider increment.
    #[serde(default = "default_slider_step")]
    pub slider_step: Option<f64>,

    #[serde(default)]
    pub theme: Option<ThemeMode>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            slider_step: default_slider_step(),
            theme: Some(ThemeMode::default()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

fn default_window_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_slider_step() -> Option<f64> {
    Some(DEFAULT_SLIDER_STEP)
}

impl Config {
    /// Window size with missing or too-small values replaced.
    #[must_use]
    pub fn window_size(&self) -> (f32, f32) {
        let width = self
            .window
            .width
            .filter(|w| w.is_finite())
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(MIN_WINDOW_WIDTH);
        let height = self
            .window
            .height
            .filter(|h| h.is_finite())
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(MIN_WINDOW_HEIGHT);
        (width, height)
    }

    /// Slider step clamped so a config file cannot request nonsensical increments.
    #[must_use]
    pub fn slider_step(&self) -> f64 {
        self.viewer
            .slider_step
            .filter(|step| step.is_finite())
            .unwrap_or(DEFAULT_SLIDER_STEP)
            .clamp(MIN_SLIDER_STEP, MAX_SLIDER_STEP)
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.viewer.theme.unwrap_or_default()
    }
}

/// Records the `--config-dir` CLI argument. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config directory override already initialized, ignoring");
    }
}

/// Returns the directory holding `settings.toml`.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Some(path) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Loads the configuration from the resolved location.
///
/// Never fails: an unreadable or malformed file yields the defaults together
/// with a warning message the caller should log.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Parses the config file at `path`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read and
/// [`crate::error::Error::Config`] if it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
log_level = "debug"

[window]
width = 1024.0
height = 768.0

[viewer]
slider_step = 0.25
theme = "light"
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("config should parse");

        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert_eq!(config.window_size(), (1024.0, 768.0));
        assert_abs_diff_eq!(config.slider_step(), 0.25);
        assert_eq!(config.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\n").expect("failed to write config");

        let config = load_from_path(&config_path).expect("config should parse");

        assert_eq!(config, Config::default());
        assert_eq!(
            config.window_size(),
            (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn slider_step_is_clamped() {
        let mut config = Config::default();
        config.viewer.slider_step = Some(50.0);
        assert_abs_diff_eq!(config.slider_step(), MAX_SLIDER_STEP);

        config.viewer.slider_step = Some(0.0);
        assert_abs_diff_eq!(config.slider_step(), MIN_SLIDER_STEP);

        config.viewer.slider_step = Some(f64::NAN);
        assert_abs_diff_eq!(config.slider_step(), DEFAULT_SLIDER_STEP);
    }

    #[test]
    fn tiny_window_is_raised_to_minimum() {
        let mut config = Config::default();
        config.window.width = Some(10.0);
        config.window.height = None;
        assert_eq!(
            config.window_size(),
            (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn explicit_override_wins() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let resolved = config_dir_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(resolved.as_deref(), Some(temp_dir.path()));
    }
}
