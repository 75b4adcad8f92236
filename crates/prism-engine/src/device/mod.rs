//! GPU device + surface management.
//!
//! - creates the wgpu Adapter/Device/Queue for a window
//! - configures the Surface (swapchain) and an optional depth target
//! - acquires frames and hands out encoders/views for rendering

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
