//! Pointer handling and the gesture state machine.
//!
//! This module translates host pointer events into engine commands. It owns
//! the viewport (pan and zoom), tracks the gesture in progress (idle,
//! panning, drawing) and dispatches edits as the pointer crosses pixels.

pub mod events;
pub mod state;
pub mod tool;
pub mod viewport;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
pub use viewport::{Point, Viewport};
