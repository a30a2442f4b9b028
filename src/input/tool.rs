//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines how a pointer gesture on the canvas is
/// interpreted: which edit it dispatches, or whether it pans the view.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Paint single pixels with the current color (default)
    #[default]
    Pen,
    /// Clear single pixels to transparent
    Eraser,
    /// Flood-fill the touched region with the current color
    Fill,
    /// Pick the topmost visible color under the pointer
    Eyedropper,
    /// Drag the viewport instead of editing
    Pan,
}
