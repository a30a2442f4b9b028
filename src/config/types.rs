//! Configuration type definitions.

use crate::draw::{Color, DEFAULT_COLOR};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas dimensions used for new documents.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Grid width in pixels (valid range: 1 - 1024)
    #[serde(default = "default_canvas_size")]
    pub width: usize,

    /// Grid height in pixels (valid range: 1 - 1024)
    #[serde(default = "default_canvas_size")]
    pub height: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the editing cursor of a freshly opened document. Users change
/// these at runtime with `set_tool`, `set_color` and the palette commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial drawing color. Any opaque token is accepted (e.g. `"#FF0000"`).
    #[serde(default = "default_color")]
    pub default_color: Color,

    /// Initial tool: pen, eraser, fill, eyedropper or pan
    #[serde(default)]
    pub default_tool: Tool,

    /// Colors preloaded into the palette. Duplicates are dropped.
    #[serde(default)]
    pub palette: Vec<Color>,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_tool: Tool::default(),
            palette: Vec::new(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Snapshots kept per stack (valid range: 1 - 50)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Pointer and viewport tuning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Gestures whose net movement stays below this many screen pixels on
    /// both axes are treated as taps
    #[serde(default = "default_tap_threshold")]
    pub tap_threshold: f64,

    /// Smallest zoom factor (screen pixels per grid pixel)
    #[serde(default = "default_min_scale")]
    pub min_scale: f64,

    /// Largest zoom factor (screen pixels per grid pixel)
    #[serde(default = "default_max_scale")]
    pub max_scale: f64,

    /// Zoom factor used before the first fit-to-surface
    #[serde(default = "default_scale")]
    pub default_scale: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tap_threshold: default_tap_threshold(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            default_scale: default_scale(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Draw grid lines between pixels
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,

    /// Grid lines are hidden below this zoom factor even when enabled
    #[serde(default = "default_grid_min_scale")]
    pub grid_min_scale: f64,

    /// Edge length of the square preview panel in screen pixels
    #[serde(default = "default_preview_size")]
    pub preview_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_grid: default_show_grid(),
            grid_min_scale: default_grid_min_scale(),
            preview_size: default_preview_size(),
        }
    }
}

fn default_canvas_size() -> usize {
    32
}

fn default_color() -> Color {
    Color::new(DEFAULT_COLOR)
}

fn default_max_depth() -> usize {
    crate::engine::MAX_HISTORY_DEPTH
}

fn default_tap_threshold() -> f64 {
    5.0
}

fn default_min_scale() -> f64 {
    1.0
}

fn default_max_scale() -> f64 {
    64.0
}

fn default_scale() -> f64 {
    8.0
}

fn default_show_grid() -> bool {
    true
}

fn default_grid_min_scale() -> f64 {
    4.0
}

fn default_preview_size() -> u32 {
    128
}
