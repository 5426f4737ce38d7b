// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar;
use crate::{Vec2, Vec3};

/// Four-lane vector, point or plane equation.
///
/// By convention `w = 0` marks a direction and `w = 1` a position; nothing
/// enforces it. The `*3` methods work on `xyz` only and pass `w` through
/// unchanged (or ignore it, for the scalar-returning ones), which is what
/// direction math on homogeneous values wants.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// All lanes zero.
    pub const ZERO: Self = Self::splat(0.0);
    /// All lanes one.
    pub const ONE: Self = Self::splat(1.0);
    /// All lanes NaN.
    pub const NAN: Self = Self::splat(f32::NAN);
    /// All lanes positive infinity.
    pub const INFINITY: Self = Self::splat(f32::INFINITY);
    /// All lanes negative infinity.
    pub const NEG_INFINITY: Self = Self::splat(f32::NEG_INFINITY);
    /// Unit vector `<1, 0, 0, 0>`.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Unit vector `<0, 1, 0, 0>`.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Unit vector `<0, 0, 1, 0>`.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Unit vector `<0, 0, 0, 1>`.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Extends a two-lane value with explicit `z` and `w`.
    pub fn from_vec2(v: Vec2, z: f32, w: f32) -> Self {
        Self::new(v.x(), v.y(), z, w)
    }

    /// Extends a three-lane value with an explicit `w`.
    pub fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; 4] {
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

    /// The `w` component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]), f(self.data[3]))
    }

    fn zip(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
            f(self.data[3], other.data[3]),
        )
    }

    fn with_w(self, w: f32) -> Self {
        Self::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Lane-wise [`scalar::eq`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| scalar::eq(a, b))
    }

    /// Lane-wise [`scalar::eq_com`] with explicit tolerances.
    pub fn approx_eq_tol(&self, other: &Self, tol_a: f32, tol_r: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| scalar::eq_com(a, b, tol_a, tol_r))
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Lane-wise product.
    pub fn mul(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Lane-wise quotient.
    pub fn div(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a / b)
    }

    /// Scales all four lanes.
    pub fn scale(&self, s: f32) -> Self {
        self.map(|a| a * s)
    }

    /// Scales `xyz`, keeping `w`.
    pub fn scale3(&self, s: f32) -> Self {
        self.scale(s).with_w(self.data[3])
    }

    /// Negates all four lanes.
    pub fn neg(&self) -> Self {
        self.map(|a| -a)
    }

    /// Negates `xyz`, keeping `w`.
    pub fn neg3(&self) -> Self {
        self.neg().with_w(self.data[3])
    }

    /// Four-lane dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.dot3(other) + self.data[3] * other.data[3]
    }

    /// Dot product of the `xyz` lanes.
    pub fn dot3(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Four-lane length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Length of the `xyz` lanes.
    pub fn length3(&self) -> f32 {
        self.length3_squared().sqrt()
    }

    /// Four-lane squared length.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Squared length of the `xyz` lanes.
    pub fn length3_squared(&self) -> f32 {
        self.dot3(self)
    }

    /// Four-lane normalisation by reciprocal length.
    ///
    /// A zero vector yields non-finite lanes.
    pub fn normalize(&self) -> Self {
        self.scale(scalar::rcp(self.length()))
    }

    /// Normalises `xyz` by their own length, keeping `w`.
    pub fn normalize3(&self) -> Self {
        self.scale3(scalar::rcp(self.length3()))
    }

    /// Cross product of the `xyz` lanes; the result's `w` is always zero.
    pub fn cross(&self, other: &Self) -> Self {
        let c = Vec3::from_vec4(*self).cross(&Vec3::from_vec4(*other));
        Self::from_vec3(c, 0.0)
    }

    /// Builds a vector from arbitrary source lanes; indices may repeat.
    ///
    /// # Panics
    /// Panics when an index is outside `0..4`.
    pub fn swizzle(&self, x: usize, y: usize, z: usize, w: usize) -> Self {
        Self::new(self.data[x], self.data[y], self.data[z], self.data[w])
    }

    /// Lane-wise [`scalar::linear`] over all four lanes.
    pub fn lerp(&self, b: &Self, t: f32) -> Self {
        self.zip(b, |from, to| scalar::linear(from, to, t))
    }

    /// [`scalar::linear`] over `xyz`; `w` is taken from `self`.
    pub fn lerp3(&self, b: &Self, t: f32) -> Self {
        self.lerp(b, t).with_w(self.data[3])
    }

    /// Lane-wise [`scalar::bezier`] over all four lanes.
    pub fn bezier(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        let lane = |i: usize| {
            scalar::bezier(self.data[i], b.data[i], in_t.data[i], out_t.data[i], t)
        };
        Self::new(lane(0), lane(1), lane(2), lane(3))
    }

    /// [`scalar::bezier`] over `xyz`; `w` is taken from `self`.
    pub fn bezier3(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        self.bezier(b, in_t, out_t, t).with_w(self.data[3])
    }

    /// Lane-wise [`scalar::hermite`] over all four lanes.
    pub fn hermite(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        let lane = |i: usize| {
            scalar::hermite(self.data[i], b.data[i], in_t.data[i], out_t.data[i], t)
        };
        Self::new(lane(0), lane(1), lane(2), lane(3))
    }

    /// [`scalar::hermite`] over `xyz`; `w` is taken from `self`.
    pub fn hermite3(&self, b: &Self, in_t: &Self, out_t: &Self, t: f32) -> Self {
        self.hermite(b, in_t, out_t, t).with_w(self.data[3])
    }
}

vector_ops!(Vec4, 4);
