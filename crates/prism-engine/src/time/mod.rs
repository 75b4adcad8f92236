//! Frame timing.
//!
//! One `FrameClock` per render loop; `tick()` once per presented frame.
//! `FpsCounter` turns the resulting delta times into periodic frame-rate reports.

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
