// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Small `f32` linear-algebra value types, quaternions and a deterministic
//! pseudo-random generator.
//!
//! All operations round to `f32`.

use std::f32::consts::TAU;

mod prng;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use prng::Prng;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

use crate::num::FloatExt;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Component-wise helpers shared by [`Vec2`], [`Vec3`] and [`Vec4`].
///
/// ```
/// use echo_ext::math::{Vec3, VectorExt};
///
/// let v = Vec3::new(1.4, 2.6, -0.2).round_to(1.0);
/// assert_eq!(v.to_tuple(), (1.0, 3.0, -0.0));
/// assert_eq!(v.with_x(9.0).x(), 9.0);
/// ```
pub trait VectorExt: Copy {
    /// Components as a tuple.
    type Tuple;

    /// Copy with the X component replaced.
    fn with_x(self, x: f32) -> Self;

    /// Copy with the Y component replaced.
    fn with_y(self, y: f32) -> Self;

    /// Every component rounded to the nearest multiple of `nearest`.
    fn round_to(self, nearest: f32) -> Self;

    /// Components as a tuple, in `x, y, z, w` order.
    fn to_tuple(self) -> Self::Tuple;
}

impl VectorExt for Vec2 {
    type Tuple = (f32, f32);

    fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y())
    }

    fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y)
    }

    fn round_to(self, nearest: f32) -> Self {
        Self::new(self.x().round_to(nearest), self.y().round_to(nearest))
    }

    fn to_tuple(self) -> Self::Tuple {
        (self.x(), self.y())
    }
}

impl VectorExt for Vec3 {
    type Tuple = (f32, f32, f32);

    fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y(), self.z())
    }

    fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y, self.z())
    }

    fn round_to(self, nearest: f32) -> Self {
        Self::new(
            self.x().round_to(nearest),
            self.y().round_to(nearest),
            self.z().round_to(nearest),
        )
    }

    fn to_tuple(self) -> Self::Tuple {
        (self.x(), self.y(), self.z())
    }
}

impl VectorExt for Vec4 {
    type Tuple = (f32, f32, f32, f32);

    fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y(), self.z(), self.w())
    }

    fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y, self.z(), self.w())
    }

    fn round_to(self, nearest: f32) -> Self {
        Self::new(
            self.x().round_to(nearest),
            self.y().round_to(nearest),
            self.z().round_to(nearest),
            self.w().round_to(nearest),
        )
    }

    fn to_tuple(self) -> Self::Tuple {
        (self.x(), self.y(), self.z(), self.w())
    }
}
