//! Configuration file support for pixelboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/pixelboard/config.toml`. Settings include canvas size, drawing
//! defaults, history depth, pointer tuning and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::{CanvasConfig, DrawingConfig, HistoryConfig, InputConfig, UiConfig};

use crate::draw::{Color, DEFAULT_COLOR, Document};
use crate::engine::MAX_HISTORY_DEPTH;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_SIZE: usize = 1024;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 16
/// height = 16
///
/// [drawing]
/// default_color = "#FF0000"
/// default_tool = "fill"
/// palette = ["#000000", "#FFFFFF"]
///
/// [history]
/// max_depth = 20
///
/// [ui]
/// show_grid = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas dimensions for new documents
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial tool, color and palette
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Undo/redo depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Tap detection and zoom limits
    #[serde(default)]
    pub input: InputConfig,

    /// Grid overlay and preview panel
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to
    /// their default when no nearest value exists) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 1024
    /// - `history.max_depth`: 1 - 50
    /// - `input.min_scale` > 0, `input.max_scale` >= `min_scale`,
    ///   `input.default_scale` within both
    /// - `input.tap_threshold`, `ui.grid_min_scale`: finite and >= 0
    /// - `ui.preview_size`: >= 1
    pub fn validate_and_clamp(&mut self) {
        // Canvas: 1 - 1024 per edge
        if !(1..=MAX_CANVAS_SIZE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_SIZE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIZE);
        }
        if !(1..=MAX_CANVAS_SIZE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_SIZE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIZE);
        }

        if self.drawing.default_color.as_str().trim().is_empty() {
            log::warn!("Empty default_color, falling back to '{}'", DEFAULT_COLOR);
            self.drawing.default_color = Color::new(DEFAULT_COLOR);
        }

        let before = self.drawing.palette.len();
        self.drawing
            .palette
            .retain(|color| !color.as_str().trim().is_empty());
        if self.drawing.palette.len() != before {
            log::warn!(
                "Dropped {} empty palette entries",
                before - self.drawing.palette.len()
            );
        }

        // History: 1 - 50
        if !(1..=MAX_HISTORY_DEPTH).contains(&self.history.max_depth) {
            log::warn!(
                "Invalid history max_depth {}, clamping to 1-{} range",
                self.history.max_depth,
                MAX_HISTORY_DEPTH
            );
            self.history.max_depth = self.history.max_depth.clamp(1, MAX_HISTORY_DEPTH);
        }

        if !self.input.tap_threshold.is_finite() || self.input.tap_threshold < 0.0 {
            log::warn!(
                "Invalid tap_threshold {:.1}, falling back to 5.0",
                self.input.tap_threshold
            );
            self.input.tap_threshold = 5.0;
        }

        // Zoom: 0 < min_scale <= default_scale <= max_scale
        if !self.input.min_scale.is_finite() || self.input.min_scale <= 0.0 {
            log::warn!(
                "Invalid min_scale {:.1}, falling back to 1.0",
                self.input.min_scale
            );
            self.input.min_scale = 1.0;
        }
        if !self.input.max_scale.is_finite() || self.input.max_scale < self.input.min_scale {
            log::warn!(
                "Invalid max_scale {:.1}, raising to min_scale {:.1}",
                self.input.max_scale,
                self.input.min_scale
            );
            self.input.max_scale = self.input.min_scale;
        }
        let (min, max) = (self.input.min_scale, self.input.max_scale);
        if !self.input.default_scale.is_finite() || !(min..=max).contains(&self.input.default_scale)
        {
            log::warn!(
                "Invalid default_scale {:.1}, clamping to {:.1}-{:.1} range",
                self.input.default_scale,
                min,
                max
            );
            self.input.default_scale = if self.input.default_scale.is_finite() {
                self.input.default_scale.clamp(min, max)
            } else {
                min
            };
        }

        if !self.ui.grid_min_scale.is_finite() || self.ui.grid_min_scale < 0.0 {
            log::warn!(
                "Invalid grid_min_scale {:.1}, falling back to 4.0",
                self.ui.grid_min_scale
            );
            self.ui.grid_min_scale = 4.0;
        }

        if self.ui.preview_size == 0 {
            log::warn!("Invalid preview_size 0, raising to 1");
            self.ui.preview_size = 1;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pixelboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pixelboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, created or written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Pretty TOML rendering of the effective configuration.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// A fresh document built from the canvas and drawing defaults.
    pub fn document(&self) -> Document {
        Document::new(self.canvas.width, self.canvas.height)
            .with_color(self.drawing.default_color.clone())
            .with_tool(self.drawing.default_tool)
            .with_palette(self.drawing.palette.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.width, 32);
        assert_eq!(config.canvas.height, 32);
        assert_eq!(config.drawing.default_color.as_str(), "#000000");
        assert_eq!(config.drawing.default_tool, Tool::Pen);
        assert_eq!(config.history.max_depth, 50);
        assert_eq!(config.input.tap_threshold, 5.0);
        assert_eq!(config.ui.grid_min_scale, 4.0);
        assert_eq!(config.ui.preview_size, 128);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_tool = "eyedropper"

            [canvas]
            width = 16
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.default_tool, Tool::Eyedropper);
        assert_eq!(config.drawing.default_color.as_str(), "#000000");
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 32);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = 0
            height = 5000

            [history]
            max_depth = 500

            [input]
            min_scale = -2.0
            max_scale = 0.5
            default_scale = 10.0

            [ui]
            preview_size = 0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_SIZE);
        assert_eq!(config.history.max_depth, MAX_HISTORY_DEPTH);
        assert_eq!(config.input.min_scale, 1.0);
        assert_eq!(config.input.max_scale, 1.0);
        assert_eq!(config.input.default_scale, 1.0);
        assert_eq!(config.ui.preview_size, 1);
    }

    #[test]
    fn document_uses_drawing_defaults() {
        let mut config = Config::default();
        config.canvas.width = 8;
        config.canvas.height = 4;
        config.drawing.default_color = Color::new("#00FF00");
        config.drawing.default_tool = Tool::Fill;
        config.drawing.palette = vec![Color::new("#fff"), Color::new("#fff")];

        let document = config.document();
        assert_eq!((document.width(), document.height()), (8, 4));
        assert_eq!(document.current_color().as_str(), "#00FF00");
        assert_eq!(document.current_tool(), Tool::Fill);
        assert_eq!(document.palette(), &[Color::new("#fff")]);
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.history.max_depth = 7;
        config.ui.show_grid = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.history.max_depth, 7);
        assert!(!loaded.ui.show_grid);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas\nwidth = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["canvas", "drawing", "history", "input", "ui"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
