//! Generic pointer event types for cross-host compatibility.

use serde::Deserialize;

/// Pointer button identification.
///
/// Touch hosts report every contact as [`MouseButton::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary button (drawing and panning)
    #[default]
    Left,
    /// Secondary button (cancels the current gesture)
    Right,
    /// Middle button (currently unused)
    Middle,
}
