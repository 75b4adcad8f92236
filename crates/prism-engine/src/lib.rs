//! prism engine crate.
//!
//! Linear algebra for camera transforms, plus the platform + GPU runtime the
//! sample programs are built on.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod math;
pub mod render;
pub mod time;
pub mod window;
