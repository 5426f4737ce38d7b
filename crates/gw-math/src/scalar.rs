// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector, quaternion and matrix modules.
//!
//! Everything here is a pure function over `f32`. Tolerance comparisons follow
//! the combined absolute/relative scheme: two values are equal when
//! `|a - b| <= max(tol_a, tol_r * max(|a|, |b|))`. The absolute term keeps the
//! test meaningful near zero, the relative term keeps it meaningful far from
//! zero.
//!
//! Interpolators ([`linear`], [`bezier`], [`hermite`]) never clamp `t`;
//! parameters outside `[0, 1]` extrapolate along the same curve.

use core::f32::consts::PI;

/// Machine epsilon used by [`eq`] for both tolerances.
pub const EPSILON: f32 = f32::EPSILON;

const EXPONENT_MASK: u32 = 0x7f80_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Returns the smaller of `a` and `b`.
#[inline]
pub fn min2(a: f32, b: f32) -> f32 {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b`.
#[inline]
pub fn max2(a: f32, b: f32) -> f32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns the smallest of three values.
#[inline]
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    min2(min2(a, b), c)
}

/// Returns the largest of three values.
#[inline]
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    max2(max2(a, b), c)
}

/// Linear blend `a + (b - a) * t`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamps `x` to `[a, b]`.
///
/// `a <= b` is a precondition; it is only checked in debug builds.
#[inline]
pub fn clamp(x: f32, a: f32, b: f32) -> f32 {
    debug_assert!(a <= b, "invalid clamp range: {a} > {b}");
    min2(max2(x, a), b)
}

/// Tolerance equality using machine epsilon for both tolerances.
#[inline]
pub fn eq(a: f32, b: f32) -> bool {
    eq_com(a, b, EPSILON, EPSILON)
}

/// Absolute-tolerance equality. Breaks down when both values are large.
#[inline]
pub fn eq_abs(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Relative-tolerance equality. Breaks down when both values are tiny.
#[inline]
pub fn eq_rel(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol * max2(a.abs(), b.abs())
}

/// Combined absolute and relative tolerance equality.
///
/// Returns `true` iff `|a - b| <= max(tol_a, tol_r * max(|a|, |b|))`.
///
/// # Examples
/// ```
/// use gw_math::scalar::eq_com;
/// assert!(eq_com(1.0e-9, 0.0, 1.0e-6, 1.0e-6));
/// assert!(eq_com(1.0e6, 1.0e6 + 0.5, 1.0e-6, 1.0e-6));
/// assert!(!eq_com(1.0, 1.1, 1.0e-6, 1.0e-6));
/// ```
#[inline]
pub fn eq_com(a: f32, b: f32, tol_a: f32, tol_r: f32) -> bool {
    (a - b).abs() <= max2(tol_a, tol_r * max2(a.abs(), b.abs()))
}

/// Returns `true` when `a` is a NaN (all exponent bits set, non-zero mantissa).
#[inline]
pub fn is_nan(a: f32) -> bool {
    let bits = a.to_bits();
    bits & EXPONENT_MASK == EXPONENT_MASK && bits & MANTISSA_MASK != 0
}

/// Returns `true` when `a` is positive or negative infinity.
#[inline]
pub fn is_inf(a: f32) -> bool {
    let bits = a.to_bits();
    bits & EXPONENT_MASK == EXPONENT_MASK && bits & MANTISSA_MASK == 0
}

/// Reciprocal `1 / a`. No divide-by-zero check; zero yields infinity.
#[inline]
pub fn rcp(a: f32) -> f32 {
    1.0 / a
}

/// Converts degrees to radians.
#[inline]
pub fn rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Linear interpolation; `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    mix(a, b, t)
}

/// Cubic Bezier interpolation.
///
/// The curve runs through the control points `a, out_t, in_t, b`: `out_t` is
/// the control point leaving `a` and `in_t` the control point entering `b`.
#[inline]
pub fn bezier(a: f32, b: f32, in_t: f32, out_t: f32, t: f32) -> f32 {
    let s = 1.0 - t;
    let s2 = s * s;
    let t2 = t * t;
    a * (s2 * s) + out_t * (3.0 * s2 * t) + in_t * (3.0 * s * t2) + b * (t2 * t)
}

/// Cubic Hermite interpolation.
///
/// `out_t` is the slope leaving `a`; `in_t` is the slope arriving at `b`.
#[inline]
pub fn hermite(a: f32, b: f32, in_t: f32, out_t: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * a + h10 * out_t + h01 * b + h11 * in_t
}
