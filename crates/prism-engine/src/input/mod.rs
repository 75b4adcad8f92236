//! Input subsystem.
//!
//! The public API does not expose winit types; the runtime translates
//! platform keyboard events into `InputEvent`s.

mod frame;
mod types;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyState};
