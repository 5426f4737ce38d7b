// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Overflow-checked integer arithmetic across mismatched integer types.
//!
//! [`int_add`] and [`int_sub`] are generic over three integer types: the
//! destination `X` and the operands `Y` and `Z`. Operands are widened to
//! `i128`, which holds every value of every supported type exactly, so the
//! sum or difference is always the true mathematical result. The only failure
//! mode left is a result outside the destination's range, including a
//! negative result headed for an unsigned destination.
//!
//! The return value is a failure flag: `true` means the destination was left
//! untouched, `false` means it now holds the exact result.
//!
//! # Examples
//! ```
//! use gw_math::{int_add, int_sub};
//!
//! let mut dst: u8 = 7;
//! assert!(int_add(&mut dst, 250_u32, 10_i64)); // 260 does not fit in u8
//! assert_eq!(dst, 7);
//!
//! let mut dst: i8 = 0;
//! assert!(!int_sub(&mut dst, 3_u64, 10_u64)); // -7 fits even though the operands are unsigned
//! assert_eq!(dst, -7);
//! ```

use core::fmt;

/// Integer types accepted by [`int_add`] and [`int_sub`].
///
/// Implemented for every primitive integer of at most 64 bits.
pub trait CheckedInt: Copy + PartialOrd + fmt::Debug {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Widens the value to `i128` without loss.
    fn widen(self) -> i128;

    /// Narrows an `i128`, returning `None` when it is out of range.
    fn narrow(value: i128) -> Option<Self>;
}

macro_rules! checked_int_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedInt for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                #[allow(clippy::cast_lossless)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn narrow(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }
            }
        )*
    };
}

checked_int_impl!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Smallest value representable by `T`.
#[inline]
pub fn int_type_min<T: CheckedInt>() -> T {
    T::MIN
}

/// Largest value representable by `T`.
#[inline]
pub fn int_type_max<T: CheckedInt>() -> T {
    T::MAX
}

/// Stores `a + b` into `dst` when the exact sum fits in `X`.
///
/// Returns `true` on failure (overflow, underflow or sign loss), leaving `dst`
/// unchanged; returns `false` after writing the exact sum.
#[inline]
#[must_use = "a `true` result means the destination was not written"]
pub fn int_add<X, Y, Z>(dst: &mut X, a: Y, b: Z) -> bool
where
    X: CheckedInt,
    Y: CheckedInt,
    Z: CheckedInt,
{
    assign(dst, a.widen() + b.widen())
}

/// Stores `a - b` into `dst` when the exact difference fits in `X`.
///
/// Returns `true` on failure, leaving `dst` unchanged; returns `false` after
/// writing the exact difference.
#[inline]
#[must_use = "a `true` result means the destination was not written"]
pub fn int_sub<X, Y, Z>(dst: &mut X, a: Y, b: Z) -> bool
where
    X: CheckedInt,
    Y: CheckedInt,
    Z: CheckedInt,
{
    assign(dst, a.widen() - b.widen())
}

#[inline]
fn assign<X: CheckedInt>(dst: &mut X, exact: i128) -> bool {
    match X::narrow(exact) {
        Some(value) => {
            *dst = value;
            false
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_match_primitive_constants() {
        assert_eq!(int_type_min::<i16>(), i16::MIN);
        assert_eq!(int_type_max::<u32>(), u32::MAX);
        assert_eq!(int_type_min::<usize>(), 0);
    }

    #[test]
    fn extreme_64_bit_operands_do_not_wrap() {
        let mut dst: i64 = 1;
        assert!(!int_add(&mut dst, u64::MAX, i64::MIN));
        assert_eq!(dst, i64::MAX);

        let mut dst: u64 = 1;
        assert!(int_sub(&mut dst, i64::MIN, u64::MAX));
        assert_eq!(dst, 1);
    }
}
