use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::{MathError, Vector3};

/// 4x4 transform in the row-vector convention.
///
/// Fields are named `m<row><col>` and laid out row-major, so the struct is
/// exactly 16 `f32` and can be uploaded with `bytemuck::bytes_of`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Matrix4x4 {
    pub m11: f32, pub m12: f32, pub m13: f32, pub m14: f32,
    pub m21: f32, pub m22: f32, pub m23: f32, pub m24: f32,
    pub m31: f32, pub m32: f32, pub m33: f32, pub m34: f32,
    pub m41: f32, pub m42: f32, pub m43: f32, pub m44: f32,
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(r: [[f32; 4]; 4]) -> Self {
        Self {
            m11: r[0][0], m12: r[0][1], m13: r[0][2], m14: r[0][3],
            m21: r[1][0], m22: r[1][1], m23: r[1][2], m24: r[1][3],
            m31: r[2][0], m32: r[2][1], m33: r[2][2], m34: r[2][3],
            m41: r[3][0], m42: r[3][1], m43: r[3][2], m44: r[3][3],
        }
    }

    #[inline]
    pub const fn to_rows(self) -> [[f32; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }

    /// The 16 components in upload order (`m11, m12, .., m44`).
    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }

    /// Matrix product `self * rhs`: apply `self` first, then `rhs`.
    pub fn multiply(self, rhs: Self) -> Self {
        let a = self.to_rows();
        let b = rhs.to_rows();
        let mut c = [[0.0f32; 4]; 4];

        for (i, row) in c.iter_mut().enumerate() {
            for (j, out) in row.iter_mut().enumerate() {
                *out = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
            }
        }

        Self::from_rows(c)
    }

    /// Transforms a homogeneous row vector: `p * self`.
    pub fn transform(self, p: [f32; 4]) -> [f32; 4] {
        let m = self.to_rows();
        let mut out = [0.0f32; 4];
        for (j, o) in out.iter_mut().enumerate() {
            *o = p[0] * m[0][j] + p[1] * m[1][j] + p[2] * m[2][j] + p[3] * m[3][j];
        }
        out
    }

    /// Transforms a point (`w = 1`) and returns the homogeneous result.
    #[inline]
    pub fn transform_point(self, p: Vector3) -> [f32; 4] {
        self.transform([p.x, p.y, p.z, 1.0])
    }

    // ── affine builders ───────────────────────────────────────────────────

    /// Counter-clockwise rotation about +Z by `radians`.
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Translation by `(x, y, z)`, stored in the fourth row.
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    // ── projections ───────────────────────────────────────────────────────

    /// Off-center orthographic projection of the box
    /// `[left, right] x [bottom, top] x [z_near, z_far]`.
    ///
    /// View-space depth `-z_near..-z_far` maps to `[0, 1]`. Requires distinct
    /// bounds on every axis.
    pub fn orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        debug_assert!(left != right && bottom != top && z_near != z_far);
        Self::from_rows([
            [2.0 / (right - left), 0.0, 0.0, 0.0],
            [0.0, 2.0 / (top - bottom), 0.0, 0.0],
            [0.0, 0.0, 1.0 / (z_near - z_far), 0.0],
            [
                (left + right) / (left - right),
                (top + bottom) / (bottom - top),
                z_near / (z_near - z_far),
                1.0,
            ],
        ])
    }

    pub fn try_orthographic_off_center(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, MathError> {
        let check = |lo: f32, hi: f32, axis: &'static str| {
            if lo.is_finite() && hi.is_finite() && lo != hi {
                Ok(())
            } else {
                Err(MathError::EmptyRange { axis })
            }
        };
        check(left, right, "x")?;
        check(bottom, top, "y")?;
        check(z_near, z_far, "z")?;
        Ok(Self::orthographic_off_center(left, right, bottom, top, z_near, z_far))
    }

    /// Perspective projection from a vertical field of view (radians).
    ///
    /// Looks down -Z; depth maps to `[0, 1]` between the clip planes.
    pub fn perspective_fov(field_of_view: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        debug_assert!(field_of_view > 0.0 && field_of_view < core::f32::consts::PI);
        debug_assert!(aspect_ratio > 0.0);
        debug_assert!(near > 0.0 && far > 0.0 && near != far);

        let scale = 1.0 / (field_of_view * 0.5).tan();
        Self::from_rows([
            [scale / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, scale, 0.0, 0.0],
            [0.0, 0.0, far / (near - far), -1.0],
            [0.0, 0.0, (near * far) / (near - far), 0.0],
        ])
    }

    pub fn try_perspective_fov(
        field_of_view: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, MathError> {
        if !(field_of_view > 0.0 && field_of_view < core::f32::consts::PI) {
            return Err(MathError::FieldOfViewOutOfRange(field_of_view));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(MathError::NonPositiveAspect(aspect_ratio));
        }
        let positive = |v: f32| v > 0.0 && v.is_finite();
        if !(positive(near) && positive(far)) || near == far {
            return Err(MathError::InvalidClipPlanes { near, far });
        }
        Ok(Self::perspective_fov(field_of_view, aspect_ratio, near, far))
    }

    // ── view ──────────────────────────────────────────────────────────────

    /// View matrix for a camera at `position` looking at `target`.
    ///
    /// The basis is right / up / backward (target to eye), placed in the first
    /// three columns; the fourth row holds the camera position projected onto
    /// each axis, negated.
    pub fn look_at(position: Vector3, target: Vector3, up: Vector3) -> Self {
        let forward = (position - target).normalize();
        let right = up.cross(forward).normalize();
        let true_up = forward.cross(right);
        Self::from_basis(position, right, true_up, forward)
    }

    pub fn try_look_at(position: Vector3, target: Vector3, up: Vector3) -> Result<Self, MathError> {
        let forward = (position - target)
            .try_normalize()
            .map_err(|_| MathError::CameraAtTarget)?;
        let right = up
            .cross(forward)
            .try_normalize()
            .map_err(|_| MathError::UpParallelToForward)?;
        let true_up = forward.cross(right);
        Ok(Self::from_basis(position, right, true_up, forward))
    }

    fn from_basis(position: Vector3, right: Vector3, up: Vector3, forward: Vector3) -> Self {
        Self::from_rows([
            [right.x, up.x, forward.x, 0.0],
            [right.y, up.y, forward.y, 0.0],
            [right.z, up.z, forward.z, 0.0],
            [-right.dot(position), -up.dot(position), -forward.dot(position), 1.0],
        ])
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;
    #[inline]
    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    fn approx_eq(a: Matrix4x4, b: Matrix4x4, eps: f32) -> bool {
        a.to_array()
            .iter()
            .zip(b.to_array().iter())
            .all(|(x, y)| (x - y).abs() <= eps)
    }

    fn sample(seed: f32) -> Matrix4x4 {
        let mut rows = [[0.0f32; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = ((i * 4 + j) as f32 * 0.37 + seed).sin() * 2.0;
            }
        }
        Matrix4x4::from_rows(rows)
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_is_sixteen_row_major_floats() {
        assert_eq!(std::mem::size_of::<Matrix4x4>(), 64);
        let m = Matrix4x4::translation(7.0, 8.0, 9.0);
        let a = m.to_array();
        assert_eq!(&a[12..16], &[7.0, 8.0, 9.0, 1.0]);
        let bytes: &[u8] = bytemuck::bytes_of(&m);
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn rows_round_trip() {
        let m = sample(0.5);
        assert_eq!(Matrix4x4::from_rows(m.to_rows()), m);
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_exact_on_both_sides() {
        let a = sample(1.0);
        assert_eq!(a * Matrix4x4::IDENTITY, a);
        assert_eq!(Matrix4x4::IDENTITY * a, a);
    }

    #[test]
    fn multiply_is_associative() {
        let (a, b, c) = (sample(0.1), sample(0.7), sample(2.3));
        assert!(approx_eq((a * b) * c, a * (b * c), 1e-4));
    }

    #[test]
    fn multiply_is_not_commutative() {
        let r = Matrix4x4::rotation_z(FRAC_PI_2);
        let t = Matrix4x4::translation(1.0, 0.0, 0.0);
        assert!(!approx_eq(r * t, t * r, EPS));
    }

    #[test]
    fn multiply_matches_known_product() {
        let a = Matrix4x4::from_rows([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [3.0, 0.0, 0.0, 1.0],
        ]);
        let b = Matrix4x4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 1.0, 0.0, 1.0],
        ]);
        let c = a * b;
        assert_eq!(c.to_rows()[0], [2.0, 6.0, 0.0, 0.0]);
        assert_eq!(c.to_rows()[3], [6.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn composition_applies_left_operand_first() {
        // Translate, then rotate a quarter turn: (1,0) -> (2,0) -> (0,2).
        let m = Matrix4x4::translation(1.0, 0.0, 0.0) * Matrix4x4::rotation_z(FRAC_PI_2);
        let p = m.transform_point(Vector3::X);
        assert!(p[0].abs() < EPS);
        assert!((p[1] - 2.0).abs() < EPS);
    }

    // ── rotation / translation ────────────────────────────────────────────

    #[test]
    fn rotation_zero_is_identity() {
        assert_eq!(Matrix4x4::rotation_z(0.0), Matrix4x4::IDENTITY);
    }

    #[test]
    fn rotation_inverse_cancels() {
        for theta in [FRAC_PI_4, FRAC_PI_2, PI] {
            let m = Matrix4x4::rotation_z(theta) * Matrix4x4::rotation_z(-theta);
            assert!(approx_eq(m, Matrix4x4::IDENTITY, EPS), "theta = {theta}");
        }
    }

    #[test]
    fn rotation_is_periodic() {
        let a = Matrix4x4::rotation_z(0.3);
        let b = Matrix4x4::rotation_z(0.3 + 2.0 * PI);
        assert!(approx_eq(a, b, EPS));
    }

    #[test]
    fn rotation_turns_x_towards_y() {
        let p = Matrix4x4::rotation_z(FRAC_PI_2).transform_point(Vector3::X);
        assert!(p[0].abs() < EPS);
        assert!((p[1] - 1.0).abs() < EPS);
    }

    #[test]
    fn translation_moves_origin() {
        let p = Matrix4x4::translation(3.0, -4.0, 5.5).transform([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(p, [3.0, -4.0, 5.5, 1.0]);
    }

    #[test]
    fn translation_ignores_directions() {
        let d = Matrix4x4::translation(3.0, -4.0, 5.5).transform([1.0, 2.0, 3.0, 0.0]);
        assert_eq!(d, [1.0, 2.0, 3.0, 0.0]);
    }

    // ── orthographic ──────────────────────────────────────────────────────

    #[test]
    fn orthographic_maps_box_corners() {
        let m = Matrix4x4::orthographic_off_center(0.0, 640.0, 480.0, 0.0, 0.0, 1.0);
        let lo = m.transform([0.0, 480.0, 0.0, 1.0]);
        let hi = m.transform([640.0, 0.0, -1.0, 1.0]);
        assert!(approx_eq(
            Matrix4x4::from_rows([lo, hi, [0.0; 4], [0.0; 4]]),
            Matrix4x4::from_rows([[-1.0, -1.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0], [0.0; 4], [0.0; 4]]),
            EPS,
        ));
    }

    #[test]
    fn orthographic_symmetric_has_no_offset() {
        let m = Matrix4x4::orthographic_off_center(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        assert_eq!(m.m41, 0.0);
        assert_eq!(m.m42, 0.0);
        assert_eq!(m.m11, 0.5);
        assert_eq!(m.m22, 1.0);
    }

    #[test]
    fn try_orthographic_rejects_empty_ranges() {
        assert_eq!(
            Matrix4x4::try_orthographic_off_center(1.0, 1.0, 0.0, 1.0, 0.0, 1.0),
            Err(MathError::EmptyRange { axis: "x" })
        );
        assert_eq!(
            Matrix4x4::try_orthographic_off_center(0.0, 1.0, 2.0, 2.0, 0.0, 1.0),
            Err(MathError::EmptyRange { axis: "y" })
        );
        assert_eq!(
            Matrix4x4::try_orthographic_off_center(0.0, 1.0, 0.0, 1.0, 5.0, 5.0),
            Err(MathError::EmptyRange { axis: "z" })
        );
    }

    #[test]
    fn try_orthographic_rejects_non_finite_bounds() {
        assert_eq!(
            Matrix4x4::try_orthographic_off_center(f32::NAN, f32::NAN, 0.0, 1.0, 0.0, 1.0),
            Err(MathError::EmptyRange { axis: "x" })
        );
        assert_eq!(
            Matrix4x4::try_orthographic_off_center(0.0, 1.0, 0.0, f32::INFINITY, 0.0, 1.0),
            Err(MathError::EmptyRange { axis: "y" })
        );
        assert_eq!(
            Matrix4x4::try_orthographic_off_center(0.0, 1.0, 0.0, 1.0, f32::NEG_INFINITY, 1.0),
            Err(MathError::EmptyRange { axis: "z" })
        );
    }

    // ── perspective ───────────────────────────────────────────────────────

    #[test]
    fn perspective_ninety_degrees_square() {
        let m = Matrix4x4::perspective_fov(FRAC_PI_2, 1.0, 1.0, 10.0);
        assert!((m.m11 - 1.0).abs() < EPS);
        assert!((m.m22 - 1.0).abs() < EPS);
        assert_eq!(m.m34, -1.0);
        assert_eq!(m.m44, 0.0);
    }

    #[test]
    fn perspective_divides_by_aspect() {
        let m = Matrix4x4::perspective_fov(FRAC_PI_2, 2.0, 1.0, 10.0);
        assert!((m.m11 - 0.5).abs() < EPS);
    }

    #[test]
    fn perspective_maps_clip_planes_to_unit_depth() {
        let (near, far) = (20.0, 60.0);
        let m = Matrix4x4::perspective_fov(1.0, 1.5, near, far);
        let n = m.transform([0.0, 0.0, -near, 1.0]);
        let f = m.transform([0.0, 0.0, -far, 1.0]);
        assert!((n[2] / n[3]).abs() < EPS);
        assert!((f[2] / f[3] - 1.0).abs() < EPS);
    }

    #[test]
    fn try_perspective_rejects_non_finite_clip_planes() {
        assert_eq!(
            Matrix4x4::try_perspective_fov(1.0, 1.0, 1.0, f32::INFINITY),
            Err(MathError::InvalidClipPlanes { near: 1.0, far: f32::INFINITY })
        );
        assert!(matches!(
            Matrix4x4::try_perspective_fov(1.0, 1.0, f32::NAN, 10.0),
            Err(MathError::InvalidClipPlanes { .. })
        ));
    }

    #[test]
    fn try_perspective_accepts_finite_planes() {
        let m = Matrix4x4::try_perspective_fov(1.0, 1.0, 0.1, 1000.0).unwrap();
        assert!(m.is_finite());
    }

    #[test]
    fn try_perspective_rejects_bad_input() {
        assert_eq!(
            Matrix4x4::try_perspective_fov(0.0, 1.0, 1.0, 2.0),
            Err(MathError::FieldOfViewOutOfRange(0.0))
        );
        assert_eq!(
            Matrix4x4::try_perspective_fov(PI, 1.0, 1.0, 2.0),
            Err(MathError::FieldOfViewOutOfRange(PI))
        );
        assert_eq!(
            Matrix4x4::try_perspective_fov(1.0, 0.0, 1.0, 2.0),
            Err(MathError::NonPositiveAspect(0.0))
        );
        assert_eq!(
            Matrix4x4::try_perspective_fov(1.0, 1.0, 3.0, 3.0),
            Err(MathError::InvalidClipPlanes { near: 3.0, far: 3.0 })
        );
        assert_eq!(
            Matrix4x4::try_perspective_fov(1.0, 1.0, -1.0, 3.0),
            Err(MathError::InvalidClipPlanes { near: -1.0, far: 3.0 })
        );
    }

    // ── look-at ───────────────────────────────────────────────────────────

    #[test]
    fn look_at_down_negative_z() {
        let m = Matrix4x4::look_at(Vector3::new(0.0, 0.0, 5.0), Vector3::ZERO, Vector3::Y);
        // Forward axis (target -> eye) is +Z, stored in the third column.
        assert_eq!([m.m13, m.m23, m.m33], [0.0, 0.0, 1.0]);
        assert_eq!(m.m43, -5.0);
        assert!(approx_eq(
            m,
            Matrix4x4::translation(0.0, 0.0, -5.0),
            EPS,
        ));
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vector3::new(3.0, 7.0, -2.0);
        let m = Matrix4x4::look_at(eye, Vector3::new(1.0, 0.0, 4.0), Vector3::Y);
        let p = m.transform_point(eye);
        assert!(p[0].abs() < 1e-4 && p[1].abs() < 1e-4 && p[2].abs() < 1e-4);
        assert_eq!(p[3], 1.0);
    }

    #[test]
    fn look_at_places_target_in_front() {
        let target = Vector3::new(1.0, 0.0, 4.0);
        let m = Matrix4x4::look_at(Vector3::new(3.0, 7.0, -2.0), target, Vector3::Y);
        let p = m.transform_point(target);
        assert!(p[0].abs() < 1e-4 && p[1].abs() < 1e-4);
        assert!(p[2] < 0.0);
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let m = Matrix4x4::look_at(Vector3::new(0.0, 30.0, 30.0), Vector3::ZERO, Vector3::Y);
        let r = m.to_rows();
        let col = |j: usize| Vector3::new(r[0][j], r[1][j], r[2][j]);
        for j in 0..3 {
            assert!((col(j).length() - 1.0).abs() < EPS);
            for k in (j + 1)..3 {
                assert!(col(j).dot(col(k)).abs() < EPS);
            }
        }
    }

    #[test]
    fn try_look_at_rejects_degenerate_cameras() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Matrix4x4::try_look_at(p, p, Vector3::Y), Err(MathError::CameraAtTarget));
        assert_eq!(
            Matrix4x4::try_look_at(Vector3::new(0.0, 5.0, 0.0), Vector3::ZERO, Vector3::Y),
            Err(MathError::UpParallelToForward)
        );
    }

    // ── view * projection ─────────────────────────────────────────────────

    #[test]
    fn orbit_camera_view_projection_is_finite() {
        let view = Matrix4x4::look_at(Vector3::new(0.0, 30.0, 30.0), Vector3::ZERO, Vector3::Y);
        let proj = Matrix4x4::perspective_fov(75.0f32.to_radians(), 4.0 / 3.0, 20.0, 60.0);
        let viewproj = view * proj;
        assert!(viewproj.is_finite());

        let clip = viewproj.transform([0.0, 0.0, 0.0, 1.0]);
        assert!(clip.iter().all(|c| c.is_finite()));
        assert!(clip[3].abs() > EPS);

        // Origin sits 30*sqrt(2) in front of the eye, inside the [20, 60] range.
        let depth = clip[2] / clip[3];
        assert!((0.0..=1.0).contains(&depth), "depth = {depth}");
        assert!((clip[3] - 30.0 * 2.0f32.sqrt()).abs() < 1e-3);
    }
}
