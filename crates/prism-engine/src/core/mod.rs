//! Contracts between the runtime loop and the sample programs.
//!
//! Per-frame state travels in an explicit `FrameCtx` instead of globals.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

pub(crate) use ctx::{center_window, WindowRequests};
