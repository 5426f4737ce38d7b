// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Operator and conversion impls shared by `Vec2`, `Vec3` and `Vec4`. Each
// forwards to the inherent method of the same name so operator and method
// paths round identically.
macro_rules! vector_ops {
    ($ty:ident, $n:literal) => {
        impl From<[f32; $n]> for $ty {
            fn from(value: [f32; $n]) -> Self {
                Self { data: value }
            }
        }

        impl From<$ty> for [f32; $n] {
            fn from(value: $ty) -> Self {
                value.data
            }
        }

        impl core::ops::Index<usize> for $ty {
            type Output = f32;
            fn index(&self, idx: usize) -> &f32 {
                &self.data[idx]
            }
        }

        impl core::ops::IndexMut<usize> for $ty {
            fn index_mut(&mut self, idx: usize) -> &mut f32 {
                &mut self.data[idx]
            }
        }

        impl core::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $ty::add(&self, &rhs)
            }
        }

        impl core::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $ty::sub(&self, &rhs)
            }
        }

        impl core::ops::Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $ty::mul(&self, &rhs)
            }
        }

        impl core::ops::Div for $ty {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                $ty::div(&self, &rhs)
            }
        }

        impl core::ops::Mul<f32> for $ty {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.scale(rhs)
            }
        }

        impl core::ops::Mul<$ty> for f32 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                rhs.scale(self)
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                $ty::neg(&self)
            }
        }

        impl core::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self = $ty::add(self, &rhs);
            }
        }

        impl core::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                *self = $ty::sub(self, &rhs);
            }
        }

        impl core::ops::MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                *self = self.scale(rhs);
            }
        }
    };
}
