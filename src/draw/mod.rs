//! Document model and pure editing primitives.
//!
//! This module defines the core data types of a pixel-art project:
//! - [`Color`]: opaque color token; transparency is `None`
//! - [`PixelGrid`]: copy-on-write raster of cells
//! - [`Layer`] and [`Frame`]: the layer stack of one animation step
//! - [`Document`]: frames plus the editing cursor, with pure edit operations
//! - [`render`]: host-agnostic projection of the current frame

pub mod color;
pub mod document;
pub mod fill;
pub mod frame;
pub mod grid;
pub mod layer;
pub mod render;

// Re-export commonly used types at module level
pub use color::{Color, DEFAULT_COLOR};
pub use document::Document;
pub use fill::flood_fill;
pub use frame::Frame;
pub use grid::{Cell, PixelGrid};
pub use layer::{DEFAULT_LAYER_PREFIX, Layer, default_layer_name, is_default_layer_name};
pub use render::{LayerProjection, ProjectedCell, RenderProjection, project, project_preview};
