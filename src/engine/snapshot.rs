use crate::draw::{Color, Document, Frame};
use crate::input::Tool;
use std::sync::Arc;

/// Point-in-time copy of the undoable part of a [`Document`].
///
/// Captured frames are deep copies: no pixel row is shared with the document
/// they came from, so later edits to that document can never leak into the
/// history.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    frames: Vec<Arc<Frame>>,
    current_frame: usize,
    current_layer: String,
    current_tool: Tool,
    current_color: Color,
    palette: Vec<Color>,
    next_id: u64,
}

impl Snapshot {
    /// Deep-copies the mutable state of `document`.
    pub fn capture(document: &Document) -> Self {
        Self {
            frames: document
                .frames
                .iter()
                .map(|frame| Arc::new(frame.deep_clone()))
                .collect(),
            current_frame: document.current_frame,
            current_layer: document.current_layer.clone(),
            current_tool: document.current_tool,
            current_color: document.current_color.clone(),
            palette: document.palette.clone(),
            next_id: document.next_id,
        }
    }

    /// Writes the captured state back into `document`, consuming the snapshot.
    ///
    /// Canvas dimensions are fixed per document and are not part of a snapshot.
    pub fn restore(self, document: &mut Document) {
        document.frames = self.frames;
        document.current_frame = self.current_frame;
        document.current_layer = self.current_layer;
        document.current_tool = self.current_tool;
        document.current_color = self.current_color;
        document.palette = self.palette;
        document.next_id = self.next_id;
    }

    pub fn frames(&self) -> impl ExactSizeIterator<Item = &Frame> {
        self.frames.iter().map(|frame| frame.as_ref())
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_layer_id(&self) -> &str {
        &self.current_layer
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}
