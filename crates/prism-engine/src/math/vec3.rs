use core::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use super::MathError;

/// Point or direction in 3D space.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product. Zero iff the inputs are parallel.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - rhs.y * self.z,
            -(self.x * rhs.z - rhs.x * self.z),
            self.x * rhs.y - rhs.x * self.y,
        )
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// The zero vector yields NaN components (debug builds assert instead).
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        debug_assert!(len > 0.0, "normalize called on a zero-length vector");
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Like [`normalize`](Self::normalize) but rejects zero or non-finite magnitudes.
    pub fn try_normalize(self) -> Result<Self, MathError> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Ok(Self::new(self.x / len, self.y / len, self.z / len))
        } else {
            Err(MathError::ZeroLengthVector)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vector3 { Vector3::new(x, y, z) }

    fn close(a: f32, b: f32) -> bool { (a - b).abs() <= 1e-6 }

    // ── dot / cross ───────────────────────────────────────────────────────

    #[test]
    fn dot_of_orthogonal_axes_is_zero() {
        assert_eq!(Vector3::X.dot(Vector3::Y), 0.0);
    }

    #[test]
    fn dot_general() {
        assert_eq!(v(1.0, 2.0, 3.0).dot(v(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn cross_x_y_is_z() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
    }

    #[test]
    fn cross_is_anticommutative() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-2.0, 0.5, 4.0);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = v(1.0, 2.0, 3.0);
        assert_eq!(a.cross(a * 2.0), Vector3::ZERO);
        assert_eq!(a.cross(Vector3::ZERO), Vector3::ZERO);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = v(0.3, -1.2, 2.0);
        let b = v(4.0, 0.1, -0.7);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-5);
        assert!(c.dot(b).abs() < 1e-5);
    }

    // ── normalize ─────────────────────────────────────────────────────────

    #[test]
    fn normalize_three_four_zero() {
        let n = v(3.0, 4.0, 0.0).normalize();
        assert!(close(n.x, 0.6));
        assert!(close(n.y, 0.8));
        assert_eq!(n.z, 0.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for input in [v(1e-3, 0.0, 0.0), v(-7.0, 2.0, 9.5), v(1e6, 1e6, -1e6), v(0.0, 0.0, -2.0)] {
            assert!(close(input.normalize().length(), 1.0), "{input:?}");
        }
    }

    #[test]
    fn try_normalize_rejects_zero() {
        assert_eq!(Vector3::ZERO.try_normalize(), Err(MathError::ZeroLengthVector));
    }

    #[test]
    fn try_normalize_rejects_infinite() {
        let r = v(f32::INFINITY, 0.0, 0.0).try_normalize();
        assert_eq!(r, Err(MathError::ZeroLengthVector));
    }

    #[test]
    fn try_normalize_matches_normalize() {
        let a = v(2.0, -3.0, 6.0);
        assert_eq!(a.try_normalize().unwrap(), a.normalize());
    }
}
