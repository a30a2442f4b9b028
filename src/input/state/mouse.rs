use crate::command::Command;
use crate::input::viewport::Point;
use crate::input::{events::MouseButton, tool::Tool};
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a pointer press.
    ///
    /// Returns the command issued for the pressed pixel, if any.
    ///
    /// # Behavior
    /// - Left press while Idle with the pan tool: starts panning
    /// - Left press while Idle with any other tool: starts drawing and applies
    ///   the tool to the pixel under the pointer
    /// - Right press: cancels the current gesture
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) -> Option<Command> {
        match button {
            MouseButton::Left => {
                if !self.is_idle() {
                    return None;
                }
                let origin = Point::new(x, y);
                let tool = self.document().current_tool();
                if tool == Tool::Pan {
                    self.state = DrawingState::Panning {
                        origin,
                        start_pan: self.viewport.pan,
                    };
                    None
                } else {
                    self.state = DrawingState::Drawing {
                        tool,
                        origin,
                        pixels: Vec::new(),
                    };
                    self.stroke_to(origin)
                }
            }
            MouseButton::Right => {
                self.on_pointer_cancel();
                None
            }
            MouseButton::Middle => None,
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Panning: moves the viewport by the distance travelled since the press
    /// - Drawing: applies the tool again only when the pointer entered a
    ///   different pixel than the last one acted on
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) -> Option<Command> {
        let point = Point::new(x, y);
        if let DrawingState::Panning { origin, start_pan } = self.state {
            let (dx, dy) = point.delta_from(origin);
            self.viewport.pan = start_pan.offset(dx, dy);
            self.needs_redraw = true;
            return None;
        }
        if matches!(self.state, DrawingState::Drawing { .. }) {
            return self.stroke_to(point);
        }
        None
    }

    /// Processes a pointer release and returns to Idle.
    ///
    /// A drawing gesture whose net movement stays below the tap threshold on
    /// both axes is a tap. A tap makes at most one edit, so the release pixel
    /// is edited only when the gesture has not acted on any pixel yet (the
    /// press landed off the grid).
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) -> Option<Command> {
        if button != MouseButton::Left {
            return None;
        }
        let point = Point::new(x, y);

        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Panning { origin, start_pan } => {
                let (dx, dy) = point.delta_from(origin);
                self.viewport.pan = start_pan.offset(dx, dy);
                self.needs_redraw = true;
                None
            }
            DrawingState::Drawing {
                tool,
                origin,
                pixels,
            } => {
                let (dx, dy) = point.delta_from(origin);
                let is_tap = dx.abs() < self.tap_threshold && dy.abs() < self.tap_threshold;
                let pixel = self.viewport.screen_to_pixel(point);
                if !is_tap || !pixels.is_empty() {
                    return None;
                }
                self.apply_tool(tool, pixel)
            }
            DrawingState::Idle => None,
        }
    }

    /// Ends the current gesture without a final edit (pointer left the surface).
    ///
    /// Edits already dispatched during the gesture stay committed.
    pub fn on_pointer_cancel(&mut self) {
        if !self.is_idle() {
            debug!("Gesture cancelled");
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    /// Applies the gesture's tool at `point` unless the pixel under it is the
    /// last one acted on.
    fn stroke_to(&mut self, point: Point) -> Option<Command> {
        let pixel = self.viewport.screen_to_pixel(point);
        let in_bounds = self.document().contains(pixel.0, pixel.1);
        let DrawingState::Drawing { tool, pixels, .. } = &mut self.state else {
            return None;
        };
        if !in_bounds || pixels.last() == Some(&pixel) {
            return None;
        }
        pixels.push(pixel);
        let tool = *tool;
        self.apply_tool(tool, pixel)
    }

    /// Issues the command `tool` performs at an in-bounds grid pixel.
    fn apply_tool(&mut self, tool: Tool, (x, y): (i32, i32)) -> Option<Command> {
        let document = self.document();
        if !document.contains(x, y) {
            return None;
        }
        let frame = document.current_frame_index();
        let layer = document.current_layer_id().to_string();
        let color = document.current_color().clone();

        let command = match tool {
            Tool::Pen => Command::SetPixel {
                frame,
                layer,
                x,
                y,
                color: Some(color),
            },
            Tool::Eraser => Command::SetPixel {
                frame,
                layer,
                x,
                y,
                color: None,
            },
            Tool::Fill => Command::Fill {
                frame,
                layer,
                x,
                y,
                color: Some(color),
            },
            Tool::Eyedropper => Command::SetColor {
                color: document.sample(x, y)?.clone(),
            },
            Tool::Pan => return None,
        };

        self.dispatch(&command);
        Some(command)
    }
}
