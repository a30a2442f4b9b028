//! Frame container for an ordered stack of layers.

use super::layer::{Layer, default_layer_name};
use super::Color;

/// One animation step: an ordered stack of [`Layer`]s.
///
/// Layers are listed bottom to top (first = bottom, last = top). A frame in a
/// document always holds at least one layer; [`Frame::remove_layer`] refuses
/// to remove the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: String,
    layers: Vec<Layer>,
}

impl Frame {
    /// Creates a frame holding a single transparent layer named `"Layer 1"`.
    pub fn new(
        id: impl Into<String>,
        layer_id: impl Into<String>,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            id: id.into(),
            layers: vec![Layer::new(layer_id, default_layer_name(1), width, height)],
        }
    }

    /// Layers in compositing order, bottom first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn layer_mut(&mut self, id: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    pub fn contains_layer(&self, id: &str) -> bool {
        self.layer(id).is_some()
    }

    /// Id of the bottom layer.
    pub fn first_layer_id(&self) -> Option<&str> {
        self.layers.first().map(|layer| layer.id.as_str())
    }

    /// Adds a layer on top of the stack.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Removes a layer and renumbers the remaining default-named layers.
    ///
    /// Returns the removed layer, or `None` if the id is unknown or it is the
    /// only layer left.
    pub fn remove_layer(&mut self, id: &str) -> Option<Layer> {
        if self.layers.len() <= 1 {
            return None;
        }
        let index = self.layers.iter().position(|layer| layer.id == id)?;
        let removed = self.layers.remove(index);
        self.renumber_default_layers();
        Some(removed)
    }

    /// Renames every `"Layer N"` layer to `"Layer 1"`, `"Layer 2"`, ... in stack order.
    ///
    /// Custom-named layers keep their names and do not consume a number.
    pub fn renumber_default_layers(&mut self) {
        let mut number = 1;
        for layer in self.layers.iter_mut().filter(|layer| layer.has_default_name()) {
            layer.name = default_layer_name(number);
            number += 1;
        }
    }

    /// Generated name for the next layer added to this frame.
    pub fn next_layer_name(&self) -> String {
        default_layer_name(self.layers.len() + 1)
    }

    /// Topmost visible color at `(x, y)`, scanning from the top layer down.
    pub fn sample(&self, x: i32, y: i32) -> Option<&Color> {
        self.layers
            .iter()
            .rev()
            .filter(|layer| layer.visible)
            .find_map(|layer| layer.pixels.color_at(x, y))
    }

    /// Copy that shares no pixel storage with `self`.
    pub fn deep_clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            layers: self.layers.iter().map(Layer::deep_clone).collect(),
        }
    }
}
