use std::fmt;

/// Degenerate input rejected by a checked math constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Vector magnitude is zero or not finite.
    ZeroLengthVector,

    /// Bounds of a projection axis coincide or are not finite.
    EmptyRange { axis: &'static str },

    /// Vertical field of view outside the open interval (0, π).
    FieldOfViewOutOfRange(f32),

    /// Aspect ratio is zero, negative or NaN.
    NonPositiveAspect(f32),

    /// Clip planes must both be positive, finite and distinct.
    InvalidClipPlanes { near: f32, far: f32 },

    /// Camera position equals its target.
    CameraAtTarget,

    /// Up vector is parallel to the viewing direction.
    UpParallelToForward,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLengthVector => write!(f, "cannot normalize a zero-length vector"),
            Self::EmptyRange { axis } => write!(f, "projection range on {axis} axis is empty"),
            Self::FieldOfViewOutOfRange(fov) => {
                write!(f, "field of view {fov} rad is outside (0, pi)")
            }
            Self::NonPositiveAspect(aspect) => write!(f, "aspect ratio {aspect} is not positive"),
            Self::InvalidClipPlanes { near, far } => {
                write!(f, "invalid clip planes near={near} far={far}")
            }
            Self::CameraAtTarget => write!(f, "camera position coincides with its target"),
            Self::UpParallelToForward => write!(f, "up vector is parallel to the view direction"),
        }
    }
}

impl std::error::Error for MathError {}
