// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar;
use crate::{Vec3, Vec4};

/// Two-lane vector or point.
///
/// No normalisation invariant is kept; callers decide when a value is unit
/// length.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2 {
    data: [f32; 2],
}

impl Vec2 {
    /// All lanes zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// All lanes one.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// All lanes NaN.
    pub const NAN: Self = Self::new(f32::NAN, f32::NAN);
    /// All lanes positive infinity.
    pub const INFINITY: Self = Self::new(f32::INFINITY, f32::INFINITY);
    /// All lanes negative infinity.
    pub const NEG_INFINITY: Self = Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
    /// Unit vector `<1, 0>`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    /// Unit vector `<0, 1>`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// Takes `x` and `y` from a three-lane value.
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x(), v.y())
    }

    /// Takes `x` and `y` from a four-lane value.
    pub fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x(), v.y())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 2] {
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

    /// Lane-wise [`scalar::eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        scalar::eq(self.data[0], other.data[0]) && scalar::eq(self.data[1], other.data[1])
    }

    /// Lane-wise [`scalar::eq_com`] with explicit tolerances.
    pub fn approx_eq_tol(&self, other: &Self, tol_a: f32, tol_r: f32) -> bool {
        scalar::eq_com(self.data[0], other.data[0], tol_a, tol_r)
            && scalar::eq_com(self.data[1], other.data[1], tol_a, tol_r)
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.data[0] + other.data[0], self.data[1] + other.data[1])
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.data[0] - other.data[0], self.data[1] - other.data[1])
    }

    /// Lane-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        Self::new(self.data[0] * other.data[0], self.data[1] * other.data[1])
    }

    /// Lane-wise quotient.
    pub fn div(&self, other: &Self) -> Self {
        Self::new(self.data[0] / other.data[0], self.data[1] / other.data[1])
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, s: f32) -> Self {
        Self::new(self.data[0] * s, self.data[1] * s)
    }

    /// Reverses the direction, preserving magnitude.
    pub fn neg(&self) -> Self {
        Self::new(-self.data[0], -self.data[1])
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1]
    }

    /// Vector length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length; no square root.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Scales to unit length by the reciprocal of the length.
    ///
    /// A zero vector yields non-finite lanes.
    pub fn normalize(&self) -> Self {
        self.scale(scalar::rcp(self.length()))
    }

    /// Counter-clockwise perpendicular `<-y, x>` with the same magnitude.
    pub fn perp(&self) -> Self {
        Self::new(-self.data[1], self.data[0])
    }

    /// Builds a vector from arbitrary source lanes; indices may repeat.
    ///
    /// # Panics
    /// Panics when an index is not `0` or `1`.
    pub fn swizzle(&self, x: usize, y: usize) -> Self {
        Self::new(self.data[x], self.data[y])
    }

    /// Lane-wise [`scalar::linear`].
    pub fn lerp(&self, b: &Self, t: f32) -> Self {
        Self::new(
            scalar::linear(self.data[0], b.data[0], t),
            scalar::linear(self.data[1], b.data[1], t),
        )
    }

    /// Lane-wise [`scalar::bezier`] from `self` to `b`.
    pub fn bezier(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        Self::new(
            scalar::bezier(self.data[0], b.data[0], in_t.data[0], out_t.data[0], t),
            scalar::bezier(self.data[1], b.data[1], in_t.data[1], out_t.data[1], t),
        )
    }

    /// Lane-wise [`scalar::hermite`] from `self` to `b`.
    pub fn hermite(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        Self::new(
            scalar::hermite(self.data[0], b.data[0], in_t.data[0], out_t.data[0], t),
            scalar::hermite(self.data[1], b.data[1], in_t.data[1], out_t.data[1], t),
        )
    }
}

vector_ops!(Vec2, 2);
