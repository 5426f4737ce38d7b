// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar;
use crate::{Quat, Vec3, Vec4};

/// Row‑major 4×4 matrix acting on column vectors (`p' = M · p`).
///
/// - Element `(row, col)` lives at `data[row * 4 + col]`; translation
///   occupies column 3.
/// - Represents affine transforms and OpenGL‑style projections. Points use
///   `w = 1`, directions `w = 0`.
///
/// # Examples
/// Basic transformations:
/// ```
/// use gw_math::{Mat4, Vec3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Rotation helpers are consistent with [`Quat`] conversions (`from_quat`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat4 {
    data: [f32; 16],
}

/// Six inward-facing plane equations `(a, b, c, d)` bounding a view volume.
///
/// A point is inside a plane when `a·x + b·y + c·z + d >= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum {
    /// Left clipping plane.
    pub left: Vec4,
    /// Right clipping plane.
    pub right: Vec4,
    /// Bottom clipping plane.
    pub bottom: Vec4,
    /// Top clipping plane.
    pub top: Vec4,
    /// Near clipping plane.
    pub near: Vec4,
    /// Far clipping plane.
    pub far: Vec4,
}

impl Frustum {
    /// Planes in `left, right, bottom, top, near, far` order.
    pub fn planes(&self) -> [Vec4; 6] {
        [self.left, self.right, self.bottom, self.top, self.near, self.far]
    }

    /// Signed plane evaluations at `point`, in [`Frustum::planes`] order.
    ///
    /// Values are true distances only for normalised planes.
    pub fn distances(&self, point: &Vec3) -> [f32; 6] {
        let p = Vec4::from_vec3(*point, 1.0);
        self.planes().map(|plane| plane.dot(&p))
    }

    /// Returns `true` when `point` is on the inner side of all six planes.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.distances(point).iter().all(|&d| d >= 0.0)
    }
}

impl Mat4 {
    /// The identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
    /// All elements zero.
    pub const ZERO: Self = Self::splat(0.0);
    /// All elements one.
    pub const ONE: Self = Self::splat(1.0);
    /// All elements NaN.
    pub const NAN: Self = Self::splat(f32::NAN);
    /// All elements positive infinity.
    pub const INFINITY: Self = Self::splat(f32::INFINITY);
    /// All elements negative infinity.
    pub const NEG_INFINITY: Self = Self::splat(f32::NEG_INFINITY);

    /// Creates a matrix from row-major array data.
    ///
    /// The first four values form row 0, the next four row 1, and so on.
    pub const fn new(data: [f32; 16]) -> Self {
        Self { data }
    }

    const fn splat(v: f32) -> Self {
        Self::new([v; 16])
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from four rows.
    pub fn from_rows(rows: [Vec4; 4]) -> Self {
        let mut m = Self::ZERO;
        for (i, row) in rows.iter().enumerate() {
            m.set_row(i, row);
        }
        m
    }

    /// Builds a matrix from four columns.
    pub fn from_cols(cols: [Vec4; 4]) -> Self {
        let mut m = Self::ZERO;
        for (i, col) in cols.iter().enumerate() {
            m.set_col(i, col);
        }
        m
    }

    /// Returns the matrix as a row‑major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics when either index is outside `0..4`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "Mat4 index ({row}, {col}) out of range");
        self.data[row * 4 + col]
    }

    /// Row `i` as a four-lane vector.
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.at(i, 0), self.at(i, 1), self.at(i, 2), self.at(i, 3))
    }

    /// Overwrites row `i`.
    pub fn set_row(&mut self, i: usize, v: &Vec4) {
        assert!(i < 4, "Mat4 row {i} out of range");
        self.data[i * 4..i * 4 + 4].copy_from_slice(&v.to_array());
    }

    /// Column `j` as a four-lane vector.
    pub fn col(&self, j: usize) -> Vec4 {
        Vec4::new(self.at(0, j), self.at(1, j), self.at(2, j), self.at(3, j))
    }

    /// Overwrites column `j`.
    pub fn set_col(&mut self, j: usize, v: &Vec4) {
        assert!(j < 4, "Mat4 column {j} out of range");
        for (i, value) in v.to_array().into_iter().enumerate() {
            self.data[i * 4 + j] = value;
        }
    }

    /// Element-wise [`scalar::eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| scalar::eq(a, b))
    }

    /// Element-wise [`scalar::eq_com`] with explicit tolerances.
    pub fn approx_eq_tol(&self, other: &Self, tol_a: f32, tol_r: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| scalar::eq_com(a, b, tol_a, tol_r))
    }

    /// Returns `true` when every element equals the identity's exactly.
    pub fn is_identity(&self) -> bool {
        self.data == Self::IDENTITY.data
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f32 {
        self.at(0, 0) + self.at(1, 1) + self.at(2, 2) + self.at(3, 3)
    }

    /// Full 4×4 determinant by Laplace expansion over 2×2 minors.
    pub fn determinant(&self) -> f32 {
        let m = |r: usize, c: usize| self.at(r, c);
        // Minors of the top two rows.
        let s0 = m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1);
        let s1 = m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2);
        let s2 = m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3);
        let s3 = m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2);
        let s4 = m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3);
        let s5 = m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3);
        // Minors of the bottom two rows.
        let c5 = m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3);
        let c4 = m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3);
        let c3 = m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2);
        let c2 = m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3);
        let c1 = m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2);
        let c0 = m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1);
        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Matrix product `a · b`.
    ///
    /// Applied to a point, the result transforms by `b` first and then by
    /// `a`.
    ///
    /// # Examples
    /// ```
    /// use gw_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0, 3.0, 4.0);
    /// assert_eq!(Mat4::concat(&a, &b).to_array(), b.to_array());
    /// ```
    pub fn concat(a: &Self, b: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a.at(row, k) * b.at(k, col);
                }
                out[row * 4 + col] = sum;
            }
        }
        Self::new(out)
    }

    /// Inverse of an affine matrix (bottom row `0 0 0 1`).
    ///
    /// Inverts the upper 3×3 block by its adjugate and maps the translation
    /// through it. The bottom row is not inspected. A singular block divides
    /// by zero and the result carries Inf/NaN.
    pub fn inverse_affine(&self) -> Self {
        let a = |r: usize, c: usize| self.at(r, c);

        let c00 = a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1);
        let c01 = a(0, 2) * a(2, 1) - a(0, 1) * a(2, 2);
        let c02 = a(0, 1) * a(1, 2) - a(0, 2) * a(1, 1);
        let c10 = a(1, 2) * a(2, 0) - a(1, 0) * a(2, 2);
        let c11 = a(0, 0) * a(2, 2) - a(0, 2) * a(2, 0);
        let c12 = a(0, 2) * a(1, 0) - a(0, 0) * a(1, 2);
        let c20 = a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0);
        let c21 = a(0, 1) * a(2, 0) - a(0, 0) * a(2, 1);
        let c22 = a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0);

        let inv_det = 1.0 / (a(0, 0) * c00 + a(0, 1) * c10 + a(0, 2) * c20);
        let r = [
            [c00 * inv_det, c01 * inv_det, c02 * inv_det],
            [c10 * inv_det, c11 * inv_det, c12 * inv_det],
            [c20 * inv_det, c21 * inv_det, c22 * inv_det],
        ];
        let (tx, ty, tz) = (a(0, 3), a(1, 3), a(2, 3));
        let t = |i: usize| -(r[i][0] * tx + r[i][1] * ty + r[i][2] * tz);

        #[rustfmt::skip]
        let m = Self::new([
            r[0][0], r[0][1], r[0][2], t(0),
            r[1][0], r[1][1], r[1][2], t(1),
            r[2][0], r[2][1], r[2][2], t(2),
            0.0,     0.0,     0.0,     1.0,
        ]);
        m
    }

    /// Builds a translation matrix.
    ///
    /// Translation occupies column 3.
    #[rustfmt::skip]
    pub const fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self::new([
            1.0, 0.0, 0.0, tx,
            0.0, 1.0, 0.0, ty,
            0.0, 0.0, 1.0, tz,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a non-uniform scale matrix.
    #[rustfmt::skip]
    pub const fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self::new([
            sx,  0.0, 0.0, 0.0,
            0.0, sy,  0.0, 0.0,
            0.0, 0.0, sz,  0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Constructs a matrix from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_mat4`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_mat4()
    }

    /// Rotation of `angle` radians about a unit-length `axis`.
    pub fn from_axis_angle_n(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle_n(axis, angle))
    }

    /// Rotation of `angle` radians about an arbitrary `axis`.
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity rotation.
    pub fn from_axis_angle_u(axis: Vec3, angle: f32) -> Self {
        Self::from_quat(&Quat::from_axis_angle_u(axis, angle))
    }

    /// Degree variant of [`Mat4::from_axis_angle_n`].
    pub fn from_axis_angle_degrees_n(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle_n(axis, scalar::rad(degrees))
    }

    /// Degree variant of [`Mat4::from_axis_angle_u`].
    pub fn from_axis_angle_degrees_u(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle_u(axis, scalar::rad(degrees))
    }

    /// Builds a rotation matrix around the X axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Y axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation matrix around the Z axis by `angle` radians.
    #[rustfmt::skip]
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Degree variant of [`Mat4::rotation_x`].
    pub fn rotation_x_degrees(degrees: f32) -> Self {
        Self::rotation_x(scalar::rad(degrees))
    }

    /// Degree variant of [`Mat4::rotation_y`].
    pub fn rotation_y_degrees(degrees: f32) -> Self {
        Self::rotation_y(scalar::rad(degrees))
    }

    /// Degree variant of [`Mat4::rotation_z`].
    pub fn rotation_z_degrees(degrees: f32) -> Self {
        Self::rotation_z(scalar::rad(degrees))
    }

    /// Builds a rotation matrix from Euler angles in radians.
    ///
    /// Ordering: rotate about X, then Y, then Z, i.e.
    /// `R = R_z(z) · R_y(y) · R_x(x)`. Matches [`Quat::from_euler_radians`].
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use gw_math::{Mat4, Vec3};
    /// // Y=90°: +Z maps to +X
    /// let r = Mat4::from_euler_radians(0.0, FRAC_PI_2, 0.0);
    /// let v = r.transform_vector(&Vec3::UNIT_Z);
    /// assert!((v.x() - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_euler_radians(x: f32, y: f32, z: f32) -> Self {
        let zy = Self::concat(&Self::rotation_z(z), &Self::rotation_y(y));
        Self::concat(&zy, &Self::rotation_x(x))
    }

    /// Degree variant of [`Mat4::from_euler_radians`].
    pub fn from_euler_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::from_euler_radians(scalar::rad(x), scalar::rad(y), scalar::rad(z))
    }

    /// Right-handed view matrix placing `eye` at the origin looking toward
    /// `target` down `-Z`.
    ///
    /// `up` only needs to be non-parallel to the view direction; it is
    /// re-orthogonalised through two cross products.
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let f = target.sub(eye).normalize();
        let s = f.cross(up).normalize();
        let u = s.cross(&f);

        #[rustfmt::skip]
        let m = Self::new([
            s.x(),  s.y(),  s.z(),  -s.dot(eye),
            u.x(),  u.y(),  u.z(),  -u.dot(eye),
            -f.x(), -f.y(), -f.z(), f.dot(eye),
            0.0,    0.0,    0.0,    1.0,
        ]);
        m
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top] ×
    /// [-near, -far]` onto clip space, z in `[-1, 1]`.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fnr = far - near;

        #[rustfmt::skip]
        let m = Self::new([
            2.0 / rl, 0.0,      0.0,         -(right + left) / rl,
            0.0,      2.0 / tb, 0.0,         -(top + bottom) / tb,
            0.0,      0.0,      -2.0 / fnr,  -(far + near) / fnr,
            0.0,      0.0,      0.0,         1.0,
        ]);
        m
    }

    /// Pixel-space orthographic projection: origin at the top-left corner,
    /// x right, y down, depth `[-1, 1]`.
    pub fn ortho_2d(width: f32, height: f32) -> Self {
        Self::ortho(0.0, width, height, 0.0, -1.0, 1.0)
    }

    /// Perspective projection with vertical field of view `fovy` radians.
    ///
    /// Requires `0 < near < far`; the camera looks down `-Z`.
    pub fn perspective_radians(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        let g = 1.0 / (fovy * 0.5).tan();
        let nf = near - far;

        #[rustfmt::skip]
        let m = Self::new([
            g / aspect, 0.0, 0.0,                0.0,
            0.0,        g,   0.0,                0.0,
            0.0,        0.0, (far + near) / nf,  2.0 * far * near / nf,
            0.0,        0.0, -1.0,               0.0,
        ]);
        m
    }

    /// Degree variant of [`Mat4::perspective_radians`].
    pub fn perspective_degrees(fovy: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::perspective_radians(scalar::rad(fovy), aspect, near, far)
    }

    /// Clip planes of a projection (or view-projection) matrix with raw,
    /// unnormalised coefficients.
    pub fn extract_frustum_u(&self) -> Frustum {
        let r0 = self.row(0);
        let r1 = self.row(1);
        let r2 = self.row(2);
        let r3 = self.row(3);
        Frustum {
            left: r3.add(&r0),
            right: r3.sub(&r0),
            bottom: r3.add(&r1),
            top: r3.sub(&r1),
            near: r3.add(&r2),
            far: r3.sub(&r2),
        }
    }

    /// Clip planes scaled so each normal `(a, b, c)` is unit length; plane
    /// evaluations are then signed distances.
    pub fn extract_frustum_n(&self) -> Frustum {
        let raw = self.extract_frustum_u();
        let n = |p: Vec4| p.scale(scalar::rcp(p.length3()));
        Frustum {
            left: n(raw.left),
            right: n(raw.right),
            bottom: n(raw.bottom),
            top: n(raw.top),
            near: n(raw.near),
            far: n(raw.far),
        }
    }

    /// Full homogeneous transform.
    pub fn transform_vec4(&self, v: &Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    /// Transforms a point with `w = 1` and divides by the resulting `w`.
    ///
    /// Use this for projection matrices; [`Mat4::transform_point`] skips the
    /// divide for affine ones.
    pub fn transform_vec3(&self, v: &Vec3) -> Vec3 {
        let h = self.transform_vec4(&Vec4::from_vec3(*v, 1.0));
        let inv_w = 1.0 / h.w();
        Vec3::new(h.x() * inv_w, h.y() * inv_w, h.z() * inv_w)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    ///
    /// Translation components are applied.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let x = point.component(0);
        let y = point.component(1);
        let z = point.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3);
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3);
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3);

        Vec3::new(nx, ny, nz)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    ///
    /// Only the rotational and scaling parts of the matrix affect the result.
    pub fn transform_vector(&self, direction: &Vec3) -> Vec3 {
        let x = direction.component(0);
        let y = direction.component(1);
        let z = direction.component(2);

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z;

        Vec3::new(nx, ny, nz)
    }

    /// [`Mat4::transform_vec3`] over a batch. `dst` and `src` must have the
    /// same length; extra elements of the longer slice are left alone.
    pub fn transform_vec3s(&self, dst: &mut [Vec3], src: &[Vec3]) {
        debug_assert_eq!(dst.len(), src.len(), "batch length mismatch");
        for (out, v) in dst.iter_mut().zip(src) {
            *out = self.transform_vec3(v);
        }
    }

    /// [`Mat4::transform_vec4`] over a batch.
    pub fn transform_vec4s(&self, dst: &mut [Vec4], src: &[Vec4]) {
        debug_assert_eq!(dst.len(), src.len(), "batch length mismatch");
        for (out, v) in dst.iter_mut().zip(src) {
            *out = self.transform_vec4(v);
        }
    }

    /// [`Mat4::transform_point`] over a batch.
    pub fn transform_points(&self, dst: &mut [Vec3], src: &[Vec3]) {
        debug_assert_eq!(dst.len(), src.len(), "batch length mismatch");
        for (out, p) in dst.iter_mut().zip(src) {
            *out = self.transform_point(p);
        }
    }

    /// [`Mat4::transform_vector`] over a batch.
    pub fn transform_vectors(&self, dst: &mut [Vec3], src: &[Vec3]) {
        debug_assert_eq!(dst.len(), src.len(), "batch length mismatch");
        for (out, v) in dst.iter_mut().zip(src) {
            *out = self.transform_vector(v);
        }
    }

    /// [`Mat4::transform_point`] applied in place.
    pub fn transform_points_in_place(&self, points: &mut [Vec3]) {
        for p in points {
            *p = self.transform_point(p);
        }
    }

    /// [`Mat4::transform_vector`] applied in place.
    pub fn transform_vectors_in_place(&self, vectors: &mut [Vec3]) {
        for v in vectors {
            *v = self.transform_vector(v);
        }
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self { data: value }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::concat(&self, &rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::concat(self, &rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = Self::concat(self, rhs);
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.transform_vec4(&rhs)
    }
}
