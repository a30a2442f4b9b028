//! The editable pixel-art document and its pure edit operations.
//!
//! Every operation takes `&self` and returns `Option<Document>`: `Some` with
//! the edited document, or `None` when the request does not apply (unknown
//! frame or layer, coordinate off the canvas, deleting the last layer, a
//! value that is already set). `None` means "keep what you have"; nothing on
//! the edit path panics or returns an error.
//!
//! Frames are reference counted. An operation copies only the frame it
//! touches, and within it only the pixel rows it writes, so the input
//! document remains valid (and cheap to keep around) after the call.

use super::Color;
use super::color::DEFAULT_COLOR;
use super::fill::flood_fill;
use super::frame::Frame;
use super::layer::Layer;
use crate::input::Tool;
use std::sync::Arc;

/// Frames, layers, and the editing cursor for one pixel-art project.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) frames: Vec<Arc<Frame>>,
    pub(crate) current_frame: usize,
    pub(crate) current_layer: String,
    pub(crate) current_tool: Tool,
    pub(crate) current_color: Color,
    pub(crate) palette: Vec<Color>,
    /// Source for engine-generated frame and layer ids
    pub(crate) next_id: u64,
}

impl Document {
    /// Creates a `width × height` document with one empty frame.
    ///
    /// Zero dimensions are raised to 1. The cursor starts on the only layer
    /// with the pen tool and [`DEFAULT_COLOR`].
    pub fn new(width: usize, height: usize) -> Self {
        let mut document = Self {
            width: width.max(1),
            height: height.max(1),
            frames: Vec::new(),
            current_frame: 0,
            current_layer: String::new(),
            current_tool: Tool::Pen,
            current_color: Color::new(DEFAULT_COLOR),
            palette: Vec::new(),
            next_id: 1,
        };
        let frame = document.fresh_frame();
        document.current_layer = frame.first_layer_id().unwrap_or_default().to_string();
        document.frames.push(Arc::new(frame));
        document
    }

    /// Sets the initial drawing color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.current_color = color;
        self
    }

    /// Sets the initial tool.
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.current_tool = tool;
        self
    }

    /// Sets the initial palette, dropping duplicates.
    pub fn with_palette(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        for color in colors {
            if !self.palette.contains(&color) {
                self.palette.push(color);
            }
        }
        self
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frames(&self) -> impl ExactSizeIterator<Item = &Frame> {
        self.frames.iter().map(|frame| frame.as_ref())
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index).map(|frame| frame.as_ref())
    }

    pub fn layer(&self, frame: usize, layer_id: &str) -> Option<&Layer> {
        self.frame(frame)?.layer(layer_id)
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    /// The selected frame. Always present.
    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame]
    }

    pub fn current_layer_id(&self) -> &str {
        &self.current_layer
    }

    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    pub fn current_color(&self) -> &Color {
        &self.current_color
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Whether `(x, y)` lies on the canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        usize::try_from(x).is_ok_and(|x| x < self.width)
            && usize::try_from(y).is_ok_and(|y| y < self.height)
    }

    /// Topmost visible color at `(x, y)` in the current frame.
    pub fn sample(&self, x: i32, y: i32) -> Option<&Color> {
        self.current_frame().sample(x, y)
    }

    /// Generated name for the next layer added to `frame`.
    pub fn next_layer_name(&self, frame: usize) -> Option<String> {
        self.frame(frame).map(Frame::next_layer_name)
    }

    /// Whether any frame or layer already uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.id == id || frame.contains_layer(id))
    }

    /// An id of the form `{prefix}-{n}` that no frame or layer uses yet.
    ///
    /// Does not reserve the id; it stays free until a command claims it.
    pub fn unused_id(&self, prefix: &str) -> String {
        (self.next_id..)
            .map(|n| format!("{prefix}-{n}"))
            .find(|id| !self.contains_id(id))
            .unwrap_or_else(|| format!("{prefix}-{}", self.next_id))
    }

    // ---------------------------------------------------------------------
    // Pixel edits
    // ---------------------------------------------------------------------

    /// Replaces one cell of a layer.
    pub fn set_pixel(
        &self,
        frame: usize,
        layer_id: &str,
        x: i32,
        y: i32,
        color: Option<Color>,
    ) -> Option<Self> {
        self.update_layer(frame, layer_id, |layer| {
            let pixels = layer.pixels.with_cell(x, y, color)?;
            Some(Layer {
                pixels,
                ..layer.clone()
            })
        })
    }

    /// Flood-fills the region of a layer around `(x, y)`.
    pub fn fill(
        &self,
        frame: usize,
        layer_id: &str,
        x: i32,
        y: i32,
        color: Option<Color>,
    ) -> Option<Self> {
        self.update_layer(frame, layer_id, |layer| {
            let pixels = flood_fill(&layer.pixels, x, y, &color)?;
            Some(Layer {
                pixels,
                ..layer.clone()
            })
        })
    }

    // ---------------------------------------------------------------------
    // Frames
    // ---------------------------------------------------------------------

    /// Appends an empty frame with a single `"Layer 1"`.
    ///
    /// The selection stays where it is; selecting the new frame is a separate
    /// [`Document::set_current_frame`] call.
    pub fn add_frame(&self) -> Option<Self> {
        let mut next = self.clone();
        let frame = next.fresh_frame();
        next.frames.push(Arc::new(frame));
        Some(next)
    }

    /// Removes a frame.
    ///
    /// Removing the only frame replaces it with a fresh default frame. The
    /// selection follows the previously selected frame when an earlier frame
    /// is removed and is clamped into range otherwise.
    pub fn delete_frame(&self, frame: usize) -> Option<Self> {
        if frame >= self.frames.len() {
            return None;
        }

        let mut next = self.clone();
        next.frames.remove(frame);
        if next.frames.is_empty() {
            let replacement = next.fresh_frame();
            next.frames.push(Arc::new(replacement));
        }
        if frame < next.current_frame {
            next.current_frame -= 1;
        }
        next.repair_cursor();
        Some(next)
    }

    // ---------------------------------------------------------------------
    // Layers
    // ---------------------------------------------------------------------

    /// Adds a transparent layer on top of a frame.
    ///
    /// `layer_id` must be unique in the document; this is the caller's
    /// responsibility.
    pub fn add_layer(&self, frame: usize, layer_id: &str, name: &str) -> Option<Self> {
        self.frames.get(frame)?;
        let mut next = self.clone();
        let layer = Layer::new(layer_id, name, next.width, next.height);
        Arc::make_mut(&mut next.frames[frame]).add_layer(layer);
        Some(next)
    }

    /// Removes a layer unless it is the frame's last one.
    ///
    /// Default-named layers are renumbered afterwards and the layer cursor
    /// moves to the first remaining layer if it pointed at the removed one.
    pub fn delete_layer(&self, frame: usize, layer_id: &str) -> Option<Self> {
        let target = self.frames.get(frame)?;
        if target.layers().len() <= 1 || !target.contains_layer(layer_id) {
            return None;
        }

        let mut next = self.clone();
        Arc::make_mut(&mut next.frames[frame]).remove_layer(layer_id)?;
        next.repair_cursor();
        Some(next)
    }

    /// Flips a layer's visibility.
    pub fn toggle_layer_visibility(&self, frame: usize, layer_id: &str) -> Option<Self> {
        self.update_layer(frame, layer_id, |layer| {
            Some(Layer {
                visible: !layer.visible,
                ..layer.clone()
            })
        })
    }

    /// Sets a layer's opacity, clamped to `[0, 1]`. Non-finite values are ignored.
    pub fn set_layer_opacity(&self, frame: usize, layer_id: &str, opacity: f64) -> Option<Self> {
        if !opacity.is_finite() {
            return None;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        self.update_layer(frame, layer_id, |layer| {
            (layer.opacity != opacity).then(|| Layer {
                opacity,
                ..layer.clone()
            })
        })
    }

    // ---------------------------------------------------------------------
    // Cursor
    // ---------------------------------------------------------------------

    /// Selects a frame, moving the layer cursor to its first layer if the
    /// current layer id is not part of it.
    pub fn set_current_frame(&self, frame: usize) -> Option<Self> {
        if frame >= self.frames.len() || frame == self.current_frame {
            return None;
        }
        let mut next = self.clone();
        next.current_frame = frame;
        next.repair_cursor();
        Some(next)
    }

    /// Selects a layer of the current frame.
    pub fn set_current_layer(&self, layer_id: &str) -> Option<Self> {
        if layer_id == self.current_layer || !self.current_frame().contains_layer(layer_id) {
            return None;
        }
        let mut next = self.clone();
        next.current_layer = layer_id.to_string();
        Some(next)
    }

    pub fn set_tool(&self, tool: Tool) -> Option<Self> {
        (tool != self.current_tool).then(|| Self {
            current_tool: tool,
            ..self.clone()
        })
    }

    pub fn set_color(&self, color: &Color) -> Option<Self> {
        (*color != self.current_color).then(|| Self {
            current_color: color.clone(),
            ..self.clone()
        })
    }

    // ---------------------------------------------------------------------
    // Palette
    // ---------------------------------------------------------------------

    /// Appends a color to the palette unless it is already there.
    pub fn add_color_to_palette(&self, color: &Color) -> Option<Self> {
        if self.palette.contains(color) {
            return None;
        }
        let mut next = self.clone();
        next.palette.push(color.clone());
        Some(next)
    }

    /// Removes every occurrence of a color from the palette.
    pub fn remove_color_from_palette(&self, color: &Color) -> Option<Self> {
        if !self.palette.contains(color) {
            return None;
        }
        let mut next = self.clone();
        next.palette.retain(|existing| existing != color);
        Some(next)
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Applies `edit` to one layer, copying only the frame that holds it.
    fn update_layer<F>(&self, frame: usize, layer_id: &str, edit: F) -> Option<Self>
    where
        F: FnOnce(&Layer) -> Option<Layer>,
    {
        let updated = edit(self.layer(frame, layer_id)?)?;
        let mut next = self.clone();
        let slot = Arc::make_mut(&mut next.frames[frame]).layer_mut(layer_id)?;
        *slot = updated;
        Some(next)
    }

    /// Returns an id of the form `{prefix}-{n}` not used anywhere in the document.
    fn allocate_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{prefix}-{}", self.next_id);
            self.next_id += 1;
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    fn fresh_frame(&mut self) -> Frame {
        let frame_id = self.allocate_id("frame");
        let layer_id = self.allocate_id("layer");
        Frame::new(frame_id, layer_id, self.width, self.height)
    }

    /// Restores the cursor invariants after frames or layers were removed.
    fn repair_cursor(&mut self) {
        if self.current_frame >= self.frames.len() {
            self.current_frame = self.frames.len().saturating_sub(1);
        }
        let frame = &self.frames[self.current_frame];
        if !frame.contains_layer(&self.current_layer) {
            self.current_layer = frame.first_layer_id().unwrap_or_default().to_string();
        }
    }
}
