//! GPU resource helpers shared by the samples.
//!
//! Conventions:
//! - static geometry goes through one staging buffer per upload ([`StagingUpload`])
//! - matrices are uploaded row-major through a [`UniformBinding`] and read transposed in WGSL

mod sampler;
mod texture;
mod uniform;
mod upload;
mod vertex;

pub use sampler::SamplerKind;
pub use texture::{checkerboard_rgba8, upload_texture_rgba8};
pub use uniform::UniformBinding;
pub use upload::{create_gpu_buffer, StagingUpload};
pub use vertex::{PositionColorVertex, PositionTextureVertex};
