//! A single raster plane within a frame.

use super::grid::PixelGrid;

/// Prefix of auto-generated layer names (`"Layer 1"`, `"Layer 2"`, ...).
pub const DEFAULT_LAYER_PREFIX: &str = "Layer ";

/// One raster plane with its own visibility and opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// Identifier, unique within the document
    pub id: String,
    /// Display name
    pub name: String,
    /// Hidden layers are skipped by rendering and the eyedropper
    pub visible: bool,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    pub pixels: PixelGrid,
}

impl Layer {
    /// Creates a visible, fully opaque, fully transparent layer.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            opacity: 1.0,
            pixels: PixelGrid::new(width, height),
        }
    }

    /// Whether the name follows the `"Layer N"` pattern used for generated names.
    pub fn has_default_name(&self) -> bool {
        is_default_layer_name(&self.name)
    }

    /// Copy that shares no pixel storage with `self`.
    pub fn deep_clone(&self) -> Self {
        Self {
            pixels: self.pixels.deep_clone(),
            ..self.clone()
        }
    }
}

/// Returns the generated name for the layer at 1-based `position`.
pub fn default_layer_name(position: usize) -> String {
    format!("{DEFAULT_LAYER_PREFIX}{position}")
}

/// Whether `name` is `"Layer "` followed by a decimal number.
pub fn is_default_layer_name(name: &str) -> bool {
    name.strip_prefix(DEFAULT_LAYER_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}
