// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar;
use crate::{Mat4, Vec3, Vec4};

/// Below this rotation angle (radians) `exp`/`ln` switch to the first-order
/// approximation `sin(θ)/θ ≈ 1`.
const SMALL_ANGLE: f32 = 1.0e-4;

/// Above this cosine `slerp` degrades to normalised lerp.
const SLERP_LINEAR_COS: f32 = 0.9995;

/// Below this `1 + dot(from, to)` the two directions are treated as opposite.
const OPPOSITE_EPSILON: f32 = 1.0e-6;

/// Quaternion stored as `(x, y, z, w)`; `w` is the scalar part.
///
/// * All angles are expressed in radians unless the method name says degrees.
/// * Only normalised quaternions represent rotations. `add`, `scale` and
///   friends happily leave the unit sphere (useful when integrating angular
///   velocity); call [`Quat::normalize`] when you need a rotation again.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// All lanes zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// All lanes one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// All lanes NaN.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN);
    /// All lanes positive infinity.
    pub const INFINITY: Self =
        Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY, f32::INFINITY);
    /// All lanes negative infinity.
    pub const NEG_INFINITY: Self = Self::new(
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
    );

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle_u`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    fn from_parts(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// The `x` component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// The `y` component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// The `z` component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// The `w` component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Selects the scalar part `w`.
    pub fn scalar(&self) -> f32 {
        self.data[3]
    }

    /// Selects the vector part `(x, y, z)`.
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Lane-wise [`scalar::eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        (0..4).all(|i| scalar::eq(self.component(i), other.component(i)))
    }

    /// Lane-wise [`scalar::eq_com`] with explicit tolerances.
    pub fn approx_eq_tol(&self, other: &Self, tol_a: f32, tol_r: f32) -> bool {
        (0..4).all(|i| scalar::eq_com(self.component(i), other.component(i), tol_a, tol_r))
    }

    /// Constructs a rotation of `angle` radians about a unit-length `axis`.
    ///
    /// The axis is used as given; pass a non-unit axis and the result is not
    /// a unit quaternion. See [`Quat::from_axis_angle_u`].
    pub fn from_axis_angle_n(axis: Vec3, angle: f32) -> Self {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Self::from_parts(axis.scale(sin_half), cos_half)
    }

    /// Constructs a rotation of `angle` radians about an arbitrary `axis`,
    /// normalising the axis first.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `1e-6`
    /// since no orientation is defined for it.
    pub fn from_axis_angle_u(axis: Vec3, angle: f32) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= 1.0e-12 {
            return Self::IDENTITY;
        }
        Self::from_axis_angle_n(axis.scale(1.0 / len_sq.sqrt()), angle)
    }

    /// Degree variant of [`Quat::from_axis_angle_n`].
    pub fn from_axis_angle_degrees_n(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle_n(axis, scalar::rad(degrees))
    }

    /// Degree variant of [`Quat::from_axis_angle_u`].
    pub fn from_axis_angle_degrees_u(axis: Vec3, degrees: f32) -> Self {
        Self::from_axis_angle_u(axis, scalar::rad(degrees))
    }

    /// Rotation from Euler angles in radians.
    ///
    /// Rotates about X first, then Y, then Z: `q = qz * qy * qx`. Matches
    /// [`Mat4::from_euler_radians`].
    pub fn from_euler_radians(x: f32, y: f32, z: f32) -> Self {
        let qx = Self::from_axis_angle_n(Vec3::UNIT_X, x);
        let qy = Self::from_axis_angle_n(Vec3::UNIT_Y, y);
        let qz = Self::from_axis_angle_n(Vec3::UNIT_Z, z);
        qz.multiply(&qy).multiply(&qx)
    }

    /// Degree variant of [`Quat::from_euler_radians`].
    pub fn from_euler_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::from_euler_radians(scalar::rad(x), scalar::rad(y), scalar::rad(z))
    }

    /// Extracts the rotation held in the upper 3×3 block of `m`.
    ///
    /// The block must be a pure rotation (orthonormal, determinant one).
    /// Branches on the largest diagonal term so the square root never sees a
    /// small argument.
    pub fn from_mat4(m: &Mat4) -> Self {
        let (m00, m01, m02) = (m.at(0, 0), m.at(0, 1), m.at(0, 2));
        let (m10, m11, m12) = (m.at(1, 0), m.at(1, 1), m.at(1, 2));
        let (m20, m21, m22) = (m.at(2, 0), m.at(2, 1), m.at(2, 2));
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s)
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Shortest-arc rotation taking direction `from` onto direction `to`.
    ///
    /// Inputs need not be unit length but must be non-zero. The result is a
    /// unit quaternion. Opposite directions rotate by π about an arbitrary
    /// axis perpendicular to `from`.
    pub fn from_to(from: &Vec3, to: &Vec3) -> Self {
        let f = from.normalize();
        let t = to.normalize();
        let d = f.dot(&t);
        if d + 1.0 < OPPOSITE_EPSILON {
            let mut axis = Vec3::UNIT_X.cross(&f);
            if axis.length_squared() < 1.0e-12 {
                axis = Vec3::UNIT_Y.cross(&f);
            }
            return Self::from_parts(axis.normalize(), 0.0);
        }
        Self::from_parts(f.cross(&t), 1.0 + d).normalize()
    }

    /// [`Quat::from_to`] over the `xyz` lanes of two four-lane values.
    pub fn from_to_vec4(from: &Vec4, to: &Vec4) -> Self {
        Self::from_to(&Vec3::from_vec4(*from), &Vec3::from_vec4(*to))
    }

    /// Lane-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
            self.component(3) + other.component(3),
        )
    }

    /// Lane-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
            self.component(3) - other.component(3),
        )
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Operand order matters: applied to a vector, the result rotates by
    /// `other` first and then by `self`, the same order as
    /// [`Mat4::concat`]. Quaternion multiplication is non‑commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use gw_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle_n(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle_n(Vec3::UNIT_X, FRAC_PI_2);
    /// // Non‑commutative: pitch*yaw is different
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let aw = self.component(3);

        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        let bw = other.component(3);

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Scales all four lanes.
    pub fn scale(&self, s: f32) -> Self {
        Self::new(
            self.component(0) * s,
            self.component(1) * s,
            self.component(2) * s,
            self.component(3) * s,
        )
    }

    /// Scales the vector part only.
    pub fn scale3(&self, s: f32) -> Self {
        Self::from_parts(self.vector().scale(s), self.scalar())
    }

    /// Negates all four lanes (the same rotation on the other cover).
    pub fn neg(&self) -> Self {
        self.scale(-1.0)
    }

    /// Negates the vector part only; identical to [`Quat::conjugate`].
    pub fn neg3(&self) -> Self {
        self.conjugate()
    }

    /// Conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::from_parts(self.vector().neg(), self.scalar())
    }

    /// Four-lane dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Algebraic norm `q · q̄`, i.e. the squared magnitude.
    pub fn norm(&self) -> f32 {
        self.dot(self)
    }

    /// Magnitude.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude; no square root.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Multiplicative inverse `q̄ / |q|²`; the conjugate for unit input.
    pub fn inverse(&self) -> Self {
        self.conjugate().scale(scalar::rcp(self.length_squared()))
    }

    /// Scales to unit length by the reciprocal magnitude.
    ///
    /// A zero quaternion yields non-finite lanes.
    pub fn normalize(&self) -> Self {
        self.scale(scalar::rcp(self.length()))
    }

    /// Exponential of the pure quaternion `(v, 0)`; `w` is ignored.
    ///
    /// Returns the unit quaternion `(v̂ sin|v|, cos|v|)`, i.e. the rotation by
    /// `2|v|` about `v̂`. This is the map used to integrate angular velocity.
    pub fn exp(&self) -> Self {
        let v = self.vector();
        let theta = v.length();
        let (sin_t, cos_t) = theta.sin_cos();
        if theta < SMALL_ANGLE {
            // sin(θ)/θ → 1
            return Self::from_parts(v, cos_t).normalize();
        }
        Self::from_parts(v.scale(sin_t / theta), cos_t)
    }

    /// Logarithm of a unit quaternion: the pure quaternion `(v̂ θ, 0)` with
    /// `θ` half the rotation angle.
    pub fn ln(&self) -> Self {
        let v = self.vector();
        let sin_t = v.length();
        let theta = sin_t.atan2(self.scalar());
        if sin_t < SMALL_ANGLE {
            // θ/sin(θ) → 1
            return Self::from_parts(v, 0.0);
        }
        Self::from_parts(v.scale(theta / sin_t), 0.0)
    }

    /// Returns `b` or `-b`, whichever lies on the same hemisphere as `a`.
    ///
    /// Both represent the same rotation; interpolating from `a` toward the
    /// returned value takes the short arc.
    pub fn closest(a: &Self, b: &Self) -> Self {
        if a.dot(b) < 0.0 {
            b.neg()
        } else {
            *b
        }
    }

    /// Normalised linear interpolation between `self` and `b`.
    pub fn lerp(&self, b: &Self, t: f32) -> Self {
        Self::new(
            scalar::linear(self.component(0), b.component(0), t),
            scalar::linear(self.component(1), b.component(1), t),
            scalar::linear(self.component(2), b.component(2), t),
            scalar::linear(self.component(3), b.component(3), t),
        )
        .normalize()
    }

    /// Spherical linear interpolation between unit quaternions.
    ///
    /// Follows the arc exactly as given; apply [`Quat::closest`] to `b` first
    /// for the shortest path. Nearly parallel inputs fall back to
    /// [`Quat::lerp`]. Nearly opposite inputs walk the arc through a
    /// quaternion perpendicular to `self`, so the result stays unit length
    /// even for `b == -self`.
    pub fn slerp(&self, b: &Self, t: f32) -> Self {
        let cos_theta = self.dot(b);
        if cos_theta > SLERP_LINEAR_COS {
            return self.lerp(b, t);
        }
        if cos_theta < -SLERP_LINEAR_COS {
            return self.slerp_opposed(b, cos_theta, t);
        }
        let theta = scalar::clamp(cos_theta, -1.0, 1.0).acos();
        let inv_sin = scalar::rcp(theta.sin());
        let wa = ((1.0 - t) * theta).sin() * inv_sin;
        let wb = (t * theta).sin() * inv_sin;
        self.scale(wa).add(&b.scale(wb))
    }

    /// Arc from `self` towards a nearly antipodal `b`.
    ///
    /// The sine is taken from the component of `b` orthogonal to `self`
    /// (two Gram–Schmidt passes) instead of from `acos`, which loses most of
    /// its precision near -1. An exactly opposite `b` has no such component;
    /// the arc then runs through the fixed perpendicular `(-y, x, -w, z)`.
    fn slerp_opposed(&self, b: &Self, cos_theta: f32, t: f32) -> Self {
        let residual = b.sub(&self.scale(cos_theta));
        let residual = residual.sub(&self.scale(self.dot(&residual)));
        let sin_theta = residual.length();
        let perp = if sin_theta > OPPOSITE_EPSILON {
            residual.scale(scalar::rcp(sin_theta))
        } else {
            Self::new(-self.y(), self.x(), -self.w(), self.z())
        };
        let (s, c) = (t * sin_theta.atan2(cos_theta)).sin_cos();
        self.scale(c).add(&perp.scale(s))
    }

    /// Spherical cubic interpolation between keyframes `p` and `q` with inner
    /// control quaternions `a` and `b` (see [`Quat::spline`]).
    pub fn squad(p: &Self, a: &Self, b: &Self, q: &Self, t: f32) -> Self {
        let outer = p.slerp(q, t);
        let inner = a.slerp(b, t);
        outer.slerp(&inner, 2.0 * t * (1.0 - t))
    }

    /// Inner control quaternion at keyframe `b` given its neighbours `a`
    /// and `c`: `b · exp(-(ln(b⁻¹a) + ln(b⁻¹c)) / 4)`.
    pub fn spline(a: &Self, b: &Self, c: &Self) -> Self {
        let inv_b = b.inverse();
        let la = inv_b.multiply(a).ln();
        let lc = inv_b.multiply(c).ln();
        let e = la.add(&lc).scale(-0.25).exp();
        b.multiply(&e)
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        let u = self.vector();
        let uv = u.cross(v);
        let uuv = u.cross(&uv);
        v.add(&uv.scale(2.0 * self.scalar()).add(&uuv.scale(2.0)))
    }

    /// Converts the quaternion to a rotation matrix.
    ///
    /// The input is normalised first, so any non-zero quaternion yields a
    /// proper rotation.
    pub fn to_mat4(&self) -> Mat4 {
        let q = self.normalize();
        let x = q.component(0);
        let y = q.component(1);
        let z = q.component(2);
        let w = q.component(3);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        #[rustfmt::skip]
        let m = Mat4::new([
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),       0.0,
            2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),       0.0,
            2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy), 0.0,
            0.0,                   0.0,                   0.0,                   1.0,
        ]);
        m
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; callers typically pass unit quaternions
/// for rotations, but normalization is not enforced by this conversion.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
