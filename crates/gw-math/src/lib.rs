// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! gw-math: single-precision vector, quaternion and matrix algebra plus a
//! WELL512 pseudo-random number generator and the sampling routines built on
//! top of it.
//!
//! Layering is strictly one-way: [`scalar`] underlies the vector, quaternion
//! and matrix modules; [`Prng`] underlies the sampling routines. Nothing here
//! knows about windows, shaders or draw submission; a rendering layer calls
//! in to produce transforms, orientations and randomized values.
//!
//! All algebra types are small `Copy` values. Operations return fresh values
//! instead of writing through out-parameters, and batch operations write into
//! caller-supplied slices. The crate performs no heap allocation.

#[macro_use]
mod macros;

pub mod int;
pub mod scalar;

mod mat4;
mod prng;
mod quat;
mod sample;
mod vec2;
mod vec3;
mod vec4;

pub use int::{int_add, int_sub, int_type_max, int_type_min, CheckedInt};
pub use mat4::{Frustum, Mat4};
pub use prng::{Prng, SeedError, DEFAULT_SEED};
pub use quat::Quat;
pub use sample::{sequence, POPULATION_MAX};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
