//! Configuration file support for scrawl.
//!
//! This module handles loading and validating user settings from the
//! configuration file at `~/.config/scrawl/config.toml`. Settings cover the
//! stroke appearance, the canvas backdrop, and rendering performance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, PerformanceConfig};

use crate::input::ShapeMode;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root type deserialized from the TOML file. Every field has a
/// default and is used when not specified in the file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// stroke_color = "black"
/// stroke_width = 2.0
/// initial_shape = "path"
///
/// [canvas]
/// backdrop_color = "gray"
/// panel_color = "white"
///
/// [performance]
/// buffer_count = 3
/// enable_vsync = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke appearance (color, width) and the startup shape mode
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Backdrop and inset panel tones
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Out-of-range values are clamped to the nearest valid value and a
    /// warning is logged. Validated ranges:
    /// - `stroke_width`: 1.0 - 20.0
    /// - `buffer_count`: 2 - 4
    /// - `initial_shape`: must name a known shape mode, else "path"
    fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1.0, 20.0);
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if self.drawing.initial_shape.parse::<ShapeMode>().is_err() {
            log::warn!(
                "Invalid initial_shape '{}', falling back to 'path'",
                self.drawing.initial_shape
            );
            self.drawing.initial_shape = "path".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scrawl");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file is not found.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::get_config_path()?)
    }

    /// Loads configuration from `path`, or returns defaults if it does not
    /// exist. Loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML syntax.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from_path(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.drawing.stroke_width, 2.0);
        assert_eq!(config.drawing.initial_shape, "path");
        assert_eq!(config.performance.buffer_count, 3);
        assert!(config.performance.enable_vsync);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[drawing]\nstroke_width = 5.0\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.drawing.stroke_width, 5.0);
        assert_eq!(config.performance.buffer_count, 3);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[drawing]\nstroke_width = 99.0\ninitial_shape = \"squiggle\"\n\n[performance]\nbuffer_count = 9\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.drawing.stroke_width, 20.0);
        assert_eq!(config.drawing.initial_shape, "path");
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }
}
