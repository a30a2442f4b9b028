//! Host-agnostic render projection.
//!
//! The engine never draws. [`project`] flattens the current frame into plain
//! data (visible layers bottom to top, each with its opaque cells) that a host
//! paints with whatever backend it has, and that the headless driver prints
//! as JSON.

use super::{Color, Document};
use crate::input::viewport::{Point, Viewport};
use serde::Serialize;

/// One opaque cell ready to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedCell {
    pub x: usize,
    pub y: usize,
    pub color: Color,
    /// Opacity of the layer the cell belongs to
    pub opacity: f64,
}

/// The opaque content of one visible layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerProjection {
    pub id: String,
    pub name: String,
    pub opacity: f64,
    pub cells: Vec<ProjectedCell>,
}

/// Everything a host needs to paint the current frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderProjection {
    /// Grid width in pixels
    pub width: usize,
    /// Grid height in pixels
    pub height: usize,
    /// Index of the projected frame
    pub frame: usize,
    /// Screen position of the grid origin
    pub pan: Point,
    /// Screen pixels per grid pixel
    pub scale: f64,
    /// Whether grid lines should be drawn
    pub grid_visible: bool,
    /// Visible layers, bottom first
    pub layers: Vec<LayerProjection>,
}

impl RenderProjection {
    /// All cells in paint order.
    pub fn cells(&self) -> impl Iterator<Item = &ProjectedCell> {
        self.layers.iter().flat_map(|layer| layer.cells.iter())
    }

    /// Topmost projected color at `(x, y)`, ignoring opacity.
    pub fn top_color_at(&self, x: usize, y: usize) -> Option<&Color> {
        self.layers
            .iter()
            .rev()
            .flat_map(|layer| layer.cells.iter())
            .find(|cell| cell.x == x && cell.y == y)
            .map(|cell| &cell.color)
    }
}

/// Projects the current frame of `document` through `viewport`.
///
/// Hidden layers are omitted entirely; transparent cells are never listed.
pub fn project(document: &Document, viewport: &Viewport, grid_visible: bool) -> RenderProjection {
    let layers = document
        .current_frame()
        .layers()
        .iter()
        .filter(|layer| layer.visible)
        .map(|layer| LayerProjection {
            id: layer.id.clone(),
            name: layer.name.clone(),
            opacity: layer.opacity,
            cells: layer
                .pixels
                .opaque_cells()
                .map(|(x, y, color)| ProjectedCell {
                    x,
                    y,
                    color: color.clone(),
                    opacity: layer.opacity,
                })
                .collect(),
        })
        .collect();

    RenderProjection {
        width: document.width(),
        height: document.height(),
        frame: document.current_frame_index(),
        pan: viewport.pan,
        scale: viewport.scale,
        grid_visible,
        layers,
    }
}

/// Projection for a `size`×`size` preview panel: integer scale, centred, no grid.
pub fn project_preview(document: &Document, size: u32) -> RenderProjection {
    let viewport = Viewport::preview(document.width(), document.height(), size);
    project(document, &viewport, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_layer_document() -> Document {
        let doc = Document::new(4, 4);
        let bottom = doc.current_layer_id().to_string();
        doc.set_pixel(0, &bottom, 0, 0, Some(Color::new("#111")))
            .and_then(|d| d.add_layer(0, "top", "Layer 2"))
            .and_then(|d| d.set_pixel(0, "top", 0, 0, Some(Color::new("#222"))))
            .and_then(|d| d.set_pixel(0, "top", 3, 1, Some(Color::new("#333"))))
            .and_then(|d| d.set_layer_opacity(0, "top", 0.5))
            .unwrap()
    }

    #[test]
    fn layers_are_listed_bottom_to_top() {
        let projection = project(&two_layer_document(), &Viewport::new(8.0), true);
        assert_eq!(projection.layers.len(), 2);
        assert_eq!(projection.layers[1].id, "top");
        assert_eq!(projection.cells().count(), 3);
        assert_eq!(projection.top_color_at(0, 0), Some(&Color::new("#222")));
        assert_eq!(projection.layers[1].cells[1].opacity, 0.5);
        assert_eq!((projection.width, projection.height), (4, 4));
        assert_eq!(projection.scale, 8.0);
        assert!(projection.grid_visible);
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let doc = two_layer_document()
            .toggle_layer_visibility(0, "top")
            .unwrap();
        let projection = project(&doc, &Viewport::default(), false);
        assert_eq!(projection.layers.len(), 1);
        assert_eq!(projection.top_color_at(0, 0), Some(&Color::new("#111")));
        assert_eq!(projection.top_color_at(3, 1), None);
    }

    #[test]
    fn preview_is_centred_without_grid() {
        let projection = project_preview(&Document::new(32, 32), 128);
        assert_eq!(projection.scale, 4.0);
        assert_eq!(projection.pan, Point::ORIGIN);
        assert!(!projection.grid_visible);
    }

    #[test]
    fn serializes_as_plain_data() {
        let value = serde_json::to_value(project(
            &two_layer_document(),
            &Viewport::new(2.0),
            false,
        ))
        .unwrap();
        assert_eq!(value["layers"][0]["cells"][0]["color"], "#111");
        assert_eq!(value["pan"]["x"], 0.0);
    }
}
