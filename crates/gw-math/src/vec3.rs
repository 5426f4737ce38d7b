// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar;
use crate::{Vec2, Vec4};

/// Three-lane vector or point.
///
/// * Points and directions share this representation; the calling context
///   decides which it is.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Mat4::transform_vector`] for directions (homogeneous
///   `w = 0`).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// All lanes zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All lanes one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// All lanes NaN.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN, f32::NAN);
    /// All lanes positive infinity.
    pub const INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    /// All lanes negative infinity.
    pub const NEG_INFINITY: Self =
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Extends a two-lane value with an explicit `z`.
    pub fn from_vec2(v: Vec2, z: f32) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    /// Drops the `w` lane of a four-lane value.
    pub fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 3] {
        self.data
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

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Lane-wise [`scalar::eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        (0..3).all(|i| scalar::eq(self.component(i), other.component(i)))
    }

    /// Lane-wise [`scalar::eq_com`] with explicit tolerances.
    pub fn approx_eq_tol(&self, other: &Self, tol_a: f32, tol_r: f32) -> bool {
        (0..3).all(|i| scalar::eq_com(self.component(i), other.component(i), tol_a, tol_r))
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Lane-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) * other.component(0),
            self.component(1) * other.component(1),
            self.component(2) * other.component(2),
        )
    }

    /// Lane-wise quotient.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) / other.component(0),
            self.component(1) / other.component(1),
            self.component(2) / other.component(2),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, s: f32) -> Self {
        Self::new(
            self.component(0) * s,
            self.component(1) * s,
            self.component(2) * s,
        )
    }

    /// Reverses the direction, preserving magnitude.
    pub fn neg(&self) -> Self {
        Self::new(-self.component(0), -self.component(1), -self.component(2))
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector; no square root.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length by the reciprocal of the length.
    ///
    /// Normalising a zero vector is a contract violation: the reciprocal is
    /// infinite and the lanes come back NaN. Nothing traps.
    pub fn normalize(&self) -> Self {
        self.scale(scalar::rcp(self.length()))
    }

    /// Builds a vector from arbitrary source lanes; indices may repeat.
    ///
    /// # Panics
    /// Panics when an index is outside `0..3`.
    pub fn swizzle(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self.component(x), self.component(y), self.component(z))
    }

    /// Lane-wise [`scalar::linear`].
    pub fn lerp(&self, b: &Self, t: f32) -> Self {
        Self::new(
            scalar::linear(self.component(0), b.component(0), t),
            scalar::linear(self.component(1), b.component(1), t),
            scalar::linear(self.component(2), b.component(2), t),
        )
    }

    /// Lane-wise [`scalar::bezier`] from `self` to `b`.
    pub fn bezier(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        let lane = |i: usize| {
            scalar::bezier(
                self.component(i),
                b.component(i),
                in_t.component(i),
                out_t.component(i),
                t,
            )
        };
        Self::new(lane(0), lane(1), lane(2))
    }

    /// Lane-wise [`scalar::hermite`] from `self` to `b`.
    pub fn hermite(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        let lane = |i: usize| {
            scalar::hermite(
                self.component(i),
                b.component(i),
                in_t.component(i),
                out_t.component(i),
                t,
            )
        };
        Self::new(lane(0), lane(1), lane(2))
    }
}

vector_ops!(Vec3, 3);
