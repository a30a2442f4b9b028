mod actions;
mod core;
mod mouse;

pub use core::{DrawingState, InputState};
