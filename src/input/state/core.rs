//! Gesture state machine and input state management.

use crate::command::Command;
use crate::config::{Config, InputConfig, UiConfig};
use crate::draw::{Document, RenderProjection, project, project_preview};
use crate::engine::Engine;
use crate::input::tool::Tool;
use crate::input::viewport::{Point, Viewport};

/// Current pointer gesture.
///
/// A gesture starts on press, is updated on motion and ends on release or
/// cancel, always returning to `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not in a gesture - waiting for a press
    Idle,
    /// Dragging the viewport with the pan tool
    Panning {
        /// Screen position of the press
        origin: Point,
        /// Viewport pan at the time of the press
        start_pan: Point,
    },
    /// Editing pixels with a drawing tool
    Drawing {
        /// Tool captured at press time
        tool: Tool,
        /// Screen position of the press
        origin: Point,
        /// Grid pixels already acted on in this gesture, in order
        pixels: Vec<(i32, i32)>,
    },
}

/// Main input state: the engine, the viewport and the gesture in progress.
///
/// Hosts feed pointer events in screen coordinates; every edit they cause
/// is dispatched to the owned [`Engine`] immediately, so cancelling a
/// gesture never rolls anything back.
#[derive(Debug)]
pub struct InputState {
    engine: Engine,
    /// Pan and zoom of the editing surface
    pub viewport: Viewport,
    /// Current gesture
    pub state: DrawingState,
    /// Net movement (per axis, screen pixels) below which a gesture is a tap
    pub tap_threshold: f64,
    /// Lower zoom bound
    pub min_scale: f64,
    /// Upper zoom bound
    pub max_scale: f64,
    /// Whether the user enabled the grid overlay
    pub show_grid: bool,
    /// Grid lines are suppressed below this zoom factor
    pub grid_min_scale: f64,
    /// Edge length of the preview panel
    pub preview_size: u32,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Wraps an engine using default input and UI settings.
    pub fn new(engine: Engine) -> Self {
        Self::with_settings(engine, &InputConfig::default(), &UiConfig::default())
    }

    /// Creates the engine and input settings from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(Engine::from_config(config), &config.input, &config.ui)
    }

    fn with_settings(engine: Engine, input: &InputConfig, ui: &UiConfig) -> Self {
        Self {
            engine,
            viewport: Viewport::new(input.default_scale),
            state: DrawingState::Idle,
            tap_threshold: input.tap_threshold,
            min_scale: input.min_scale,
            max_scale: input.max_scale,
            show_grid: ui.show_grid,
            grid_min_scale: ui.grid_min_scale,
            preview_size: ui.preview_size,
            needs_redraw: true,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn document(&self) -> &Document {
        self.engine.document()
    }

    /// Dispatches a command to the engine. Returns `true` if the document changed.
    pub fn dispatch(&mut self, command: &Command) -> bool {
        let changed = self.engine.dispatch(command);
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Whether no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, DrawingState::Idle)
    }

    /// Grid lines are shown only when enabled and zoomed in far enough.
    pub fn grid_visible(&self) -> bool {
        self.show_grid && self.viewport.scale >= self.grid_min_scale
    }

    /// Paintable view of the current frame through the viewport.
    pub fn projection(&self) -> RenderProjection {
        project(self.document(), &self.viewport, self.grid_visible())
    }

    /// Paintable view of the current frame for the preview panel.
    pub fn preview_projection(&self) -> RenderProjection {
        project_preview(self.document(), self.preview_size)
    }
}
