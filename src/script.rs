//! JSON-lines scripts for driving an editing session without a UI.
//!
//! Each non-blank line is one JSON object. Lines starting with `#` are
//! comments. Three kinds of step are understood:
//!
//! ```text
//! {"type": "set_tool", "tool": "fill"}              engine command
//! {"pointer": "press", "x": 12.0, "y": 40.5}        pointer event
//! {"view": "fit", "width": 640.0, "height": 480.0}  viewport change
//! ```

use crate::command::Command;
use crate::input::{InputState, MouseButton, Point};
use log::{debug, warn};
use serde::Deserialize;
use std::io::BufRead;
use thiserror::Error;

/// Errors raised while reading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Invalid script step on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "pointer", rename_all = "snake_case")]
pub enum PointerStep {
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        x: f64,
        y: f64,
    },
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    Cancel,
}

/// A viewport or overlay change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewStep {
    Fit { width: f64, height: f64 },
    Zoom { factor: f64, x: f64, y: f64 },
    ToggleGrid,
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Command(Command),
    Pointer(PointerStep),
    View(ViewStep),
}

impl ScriptStep {
    /// Parses one JSON object, choosing the step kind by its discriminating key.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(line)?;
        if value.get("pointer").is_some() {
            serde_json::from_value(value).map(Self::Pointer)
        } else if value.get("view").is_some() {
            serde_json::from_value(value).map(Self::View)
        } else {
            serde_json::from_value(value).map(Self::Command)
        }
    }

    /// Applies the step. Returns `true` if it issued or changed anything.
    pub fn apply(&self, state: &mut InputState) -> bool {
        match self {
            Self::Command(command) => state.dispatch(command),
            Self::Pointer(pointer) => match *pointer {
                PointerStep::Press { x, y, button } => state.on_mouse_press(button, x, y).is_some(),
                PointerStep::Move { x, y } => state.on_mouse_motion(x, y).is_some(),
                PointerStep::Release { x, y, button } => {
                    state.on_mouse_release(button, x, y).is_some()
                }
                PointerStep::Cancel => {
                    state.on_pointer_cancel();
                    false
                }
            },
            Self::View(view) => {
                match *view {
                    ViewStep::Fit { width, height } => state.fit_to_surface(width, height),
                    ViewStep::Zoom { factor, x, y } => state.zoom_about(factor, Point::new(x, y)),
                    ViewStep::ToggleGrid => state.toggle_grid(),
                }
                true
            }
        }
    }
}

/// Counts gathered while running a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Steps parsed and applied
    pub steps: usize,
    /// Steps that issued a command or changed the view
    pub effective: usize,
    /// Lines rejected (only with `keep_going`)
    pub skipped: usize,
}

/// Runs every step of a script against `state`.
///
/// With `keep_going`, malformed lines are logged and skipped; otherwise the
/// first one aborts the run. Steps before it stay applied.
pub fn run<R: BufRead>(
    reader: R,
    state: &mut InputState,
    keep_going: bool,
) -> Result<ScriptReport, ScriptError> {
    let mut report = ScriptReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let step = match ScriptStep::parse(trimmed) {
            Ok(step) => step,
            Err(source) if keep_going => {
                warn!("Skipping line {}: {}", index + 1, source);
                report.skipped += 1;
                continue;
            }
            Err(source) => {
                return Err(ScriptError::Parse {
                    line: index + 1,
                    source,
                });
            }
        };

        let effective = step.apply(state);
        debug!("Line {}: {:?} (effective: {})", index + 1, step, effective);
        report.steps += 1;
        report.effective += usize::from(effective);
    }

    Ok(report)
}
