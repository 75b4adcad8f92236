//! Linear algebra for camera and projection transforms.
//!
//! Convention:
//! - right-handed coordinates
//! - row vectors: a point transforms as `p' = p * M`
//! - `a * b` applies `a` first, then `b` (so `viewproj = view * proj`)
//!
//! `Matrix4x4` is stored as 16 consecutive `f32` in `m11..m44` order and can be
//! copied byte-for-byte into a uniform buffer. WGSL reads that memory as the
//! transpose, so `m * vec4(p, 1.0)` in a shader computes `p * M`.
//!
//! Unchecked constructors assert their preconditions in debug builds only and
//! otherwise let NaN/Inf propagate. The `try_*` variants report the violated
//! precondition instead.

mod error;
mod mat4;
mod vec3;

pub use error::MathError;
pub use mat4::Matrix4x4;
pub use vec3::Vector3;
