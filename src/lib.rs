//! Multi-frame, multi-layer pixel-art editing engine.
//!
//! The document model and its pure edit operations live in [`draw`];
//! [`command`] is the closed set of operations and the reducer over them;
//! [`engine`] owns a document together with its undo/redo history; [`input`]
//! maps pointer gestures on a panned and zoomed surface onto commands.
//! [`config`] and [`script`] support the headless `pixelboard` binary.

pub mod command;
pub mod config;
pub mod draw;
pub mod engine;
pub mod input;
pub mod script;

pub use command::{Command, apply, reduce};
pub use config::Config;
pub use draw::Document;
pub use engine::Engine;
pub use input::InputState;
