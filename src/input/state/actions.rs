use crate::command::Command;
use crate::input::viewport::{Point, Viewport, clamp_scale};
use log::debug;

use super::InputState;

impl InputState {
    /// Reverts the most recent undoable edit. Returns `true` if anything changed.
    pub fn undo(&mut self) -> bool {
        self.dispatch(&Command::Undo)
    }

    /// Re-applies the most recently undone edit. Returns `true` if anything changed.
    pub fn redo(&mut self) -> bool {
        self.dispatch(&Command::Redo)
    }

    /// Appends a frame and selects it.
    ///
    /// Issued as two commands: `AddFrame` (undoable) followed by
    /// `SetCurrentFrame` (cursor only).
    pub fn add_frame_and_select(&mut self) -> bool {
        if !self.dispatch(&Command::AddFrame) {
            return false;
        }
        let frame = self.document().frame_count() - 1;
        self.dispatch(&Command::SetCurrentFrame { frame });
        true
    }

    /// Adds a default-named layer on top of the current frame and selects it.
    ///
    /// Returns the new layer's id. Issued as `AddLayer` followed by
    /// `SetCurrentLayer`.
    pub fn add_layer_and_select(&mut self) -> Option<String> {
        let document = self.document();
        let frame = document.current_frame_index();
        let layer = document.unused_id("layer");
        let name = document.next_layer_name(frame)?;

        if !self.dispatch(&Command::AddLayer {
            frame,
            layer: layer.clone(),
            name,
        }) {
            return None;
        }
        self.dispatch(&Command::SetCurrentLayer {
            layer: layer.clone(),
        });
        Some(layer)
    }

    /// Flips the grid overlay preference.
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.needs_redraw = true;
        debug!("Grid overlay {}", if self.show_grid { "on" } else { "off" });
    }

    /// Fits the whole grid inside a `width`×`height` surface, centred on
    /// whole screen pixels.
    pub fn fit_to_surface(&mut self, width: f64, height: f64) {
        let (columns, rows) = (self.document().width(), self.document().height());
        let fitted = Viewport::fit(columns, rows, width, height);
        let scale = clamp_scale(fitted.scale, self.min_scale, self.max_scale);
        self.viewport = Viewport::centred(columns, rows, width, height, scale);
        self.needs_redraw = true;
    }

    /// Zooms by `factor` around a screen position, within the configured limits.
    pub fn zoom_about(&mut self, factor: f64, anchor: Point) {
        let zoomed = self
            .viewport
            .zoom_about(factor, anchor, self.min_scale, self.max_scale);
        if zoomed != self.viewport {
            self.viewport = zoomed;
            self.needs_redraw = true;
        }
    }
}
