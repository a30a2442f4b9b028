//! The closed set of commands the UI can issue against a document.
//!
//! Edit commands are applied by the pure reducer [`apply`]; `Undo` and `Redo`
//! only make sense against an [`Engine`](crate::engine::Engine), which owns
//! the history.

use crate::draw::{Color, Document};
use crate::input::Tool;
use serde::{Deserialize, Serialize};

/// Every operation the engine accepts.
///
/// Serialized with a `type` tag, e.g.
/// `{"type": "set_pixel", "frame": 0, "layer": "layer-2", "x": 3, "y": 3, "color": "#000000"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // Pixel edits
    SetPixel {
        frame: usize,
        layer: String,
        x: i32,
        y: i32,
        color: Option<Color>,
    },
    Fill {
        frame: usize,
        layer: String,
        x: i32,
        y: i32,
        color: Option<Color>,
    },

    // Frames
    AddFrame,
    DeleteFrame {
        frame: usize,
    },

    // Layers
    AddLayer {
        frame: usize,
        layer: String,
        name: String,
    },
    DeleteLayer {
        frame: usize,
        layer: String,
    },
    ToggleLayerVisibility {
        frame: usize,
        layer: String,
    },
    SetLayerOpacity {
        frame: usize,
        layer: String,
        opacity: f64,
    },

    // Cursor
    SetCurrentFrame {
        frame: usize,
    },
    SetCurrentLayer {
        layer: String,
    },
    SetTool {
        tool: Tool,
    },
    SetColor {
        color: Color,
    },

    // Palette
    AddPaletteColor {
        color: Color,
    },
    RemovePaletteColor {
        color: Color,
    },

    // History
    Undo,
    Redo,
}

impl Command {
    /// Short snake_case name, matching the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetPixel { .. } => "set_pixel",
            Self::Fill { .. } => "fill",
            Self::AddFrame => "add_frame",
            Self::DeleteFrame { .. } => "delete_frame",
            Self::AddLayer { .. } => "add_layer",
            Self::DeleteLayer { .. } => "delete_layer",
            Self::ToggleLayerVisibility { .. } => "toggle_layer_visibility",
            Self::SetLayerOpacity { .. } => "set_layer_opacity",
            Self::SetCurrentFrame { .. } => "set_current_frame",
            Self::SetCurrentLayer { .. } => "set_current_layer",
            Self::SetTool { .. } => "set_tool",
            Self::SetColor { .. } => "set_color",
            Self::AddPaletteColor { .. } => "add_palette_color",
            Self::RemovePaletteColor { .. } => "remove_palette_color",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }

    /// Whether the command only moves the editing cursor.
    ///
    /// Cursor changes are never recorded in the undo history.
    pub fn is_cursor_only(&self) -> bool {
        matches!(
            self,
            Self::SetCurrentFrame { .. }
                | Self::SetCurrentLayer { .. }
                | Self::SetTool { .. }
                | Self::SetColor { .. }
        )
    }

    /// Whether the command navigates history rather than editing.
    pub fn is_history_navigation(&self) -> bool {
        matches!(self, Self::Undo | Self::Redo)
    }

    /// Whether applying the command creates an undo point.
    pub fn is_undoable(&self) -> bool {
        !self.is_cursor_only() && !self.is_history_navigation()
    }
}

/// Applies `command` to `document`, returning the edited document or `None`
/// when it has no effect. `Undo` and `Redo` always return `None` here.
pub fn reduce(document: &Document, command: &Command) -> Option<Document> {
    match command {
        Command::SetPixel {
            frame,
            layer,
            x,
            y,
            color,
        } => document.set_pixel(*frame, layer, *x, *y, color.clone()),
        Command::Fill {
            frame,
            layer,
            x,
            y,
            color,
        } => document.fill(*frame, layer, *x, *y, color.clone()),
        Command::AddFrame => document.add_frame(),
        Command::DeleteFrame { frame } => document.delete_frame(*frame),
        Command::AddLayer { frame, layer, name } => document.add_layer(*frame, layer, name),
        Command::DeleteLayer { frame, layer } => document.delete_layer(*frame, layer),
        Command::ToggleLayerVisibility { frame, layer } => {
            document.toggle_layer_visibility(*frame, layer)
        }
        Command::SetLayerOpacity {
            frame,
            layer,
            opacity,
        } => document.set_layer_opacity(*frame, layer, *opacity),
        Command::SetCurrentFrame { frame } => document.set_current_frame(*frame),
        Command::SetCurrentLayer { layer } => document.set_current_layer(layer),
        Command::SetTool { tool } => document.set_tool(*tool),
        Command::SetColor { color } => document.set_color(color),
        Command::AddPaletteColor { color } => document.add_color_to_palette(color),
        Command::RemovePaletteColor { color } => document.remove_color_from_palette(color),
        Command::Undo | Command::Redo => None,
    }
}

/// Pure reducer: the document after `command`, or a copy of the input when
/// the command does not apply.
///
/// The copy is cheap (frames are shared), and the caller's document is never
/// modified.
pub fn apply(document: &Document, command: &Command) -> Document {
    reduce(document, command).unwrap_or_else(|| document.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        let set_tool = Command::SetTool { tool: Tool::Fill };
        assert!(set_tool.is_cursor_only());
        assert!(!set_tool.is_undoable());

        let draw = Command::SetPixel {
            frame: 0,
            layer: "l".into(),
            x: 0,
            y: 0,
            color: None,
        };
        assert!(draw.is_undoable());
        assert!(Command::AddPaletteColor { color: "#fff".into() }.is_undoable());
        assert!(!Command::Undo.is_undoable());
        assert!(Command::Redo.is_history_navigation());
    }

    #[test]
    fn serde_tag_matches_name() {
        let commands = [
            Command::AddFrame,
            Command::DeleteFrame { frame: 0 },
            Command::SetColor {
                color: "#abc".into(),
            },
            Command::SetTool {
                tool: Tool::Eyedropper,
            },
            Command::Undo,
        ];
        for command in commands {
            let value = serde_json::to_value(&command).unwrap();
            assert_eq!(value["type"], command.name());
        }
    }

    #[test]
    fn parses_transparent_pixel() {
        let command: Command = serde_json::from_str(
            r#"{"type":"set_pixel","frame":0,"layer":"l","x":1,"y":2,"color":null}"#,
        )
        .unwrap();
        assert_eq!(
            command,
            Command::SetPixel {
                frame: 0,
                layer: "l".into(),
                x: 1,
                y: 2,
                color: None,
            }
        );
    }

    #[test]
    fn apply_returns_equal_document_for_no_ops() {
        let document = Document::new(4, 4);
        let layer = document.current_layer_id().to_string();
        let off_canvas = Command::SetPixel {
            frame: 0,
            layer,
            x: -1,
            y: 9,
            color: Some("#000".into()),
        };
        assert_eq!(apply(&document, &off_canvas), document);
        assert_eq!(apply(&document, &Command::Undo), document);
    }

    #[test]
    fn apply_does_not_mutate_input() {
        let document = Document::new(4, 4);
        let layer = document.current_layer_id().to_string();
        let before = document.clone();
        let after = apply(
            &document,
            &Command::Fill {
                frame: 0,
                layer,
                x: 0,
                y: 0,
                color: Some("#f00".into()),
            },
        );
        assert_eq!(document, before);
        assert_ne!(after, before);
    }
}
