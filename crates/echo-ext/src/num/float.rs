// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Floating-point extension methods.

use core::f64::consts::TAU as TAU_F64;

/// Extension methods for `f32` and `f64`.
///
/// ```
/// use echo_ext::num::FloatExt;
///
/// assert_eq!(25.0_f32.wrap(10.0, 20.0), 15.0);
/// assert_eq!(0.75_f64.saturate(), 0.75);
/// assert_eq!(7.3_f64.round_to(0.5), 7.5);
/// ```
pub trait FloatExt: Copy + Sized {
    /// Converts an angle in degrees to radians.
    fn deg_to_rad(self) -> Self;

    /// Converts an angle in radians to degrees.
    fn rad_to_deg(self) -> Self;

    /// Rounds to the nearest multiple of `nearest`. Halfway cases go to the
    /// even multiple.
    fn round_to(self, nearest: Self) -> Self;

    /// Clamps to `[0, 1]`.
    fn saturate(self) -> Self;

    /// `value % 2 == 0`.
    fn is_even(self) -> bool;

    /// `value % 2 != 0` for finite values.
    fn is_odd(self) -> bool;

    /// `-1`, `0` or `1` depending on the sign; NaN and both zeroes give `0`.
    fn sign(self) -> i32;

    /// Wraps the value into `[low, high)`.
    ///
    /// An empty range follows IEEE arithmetic and yields NaN.
    fn wrap(self, low: Self, high: Self) -> Self;

    /// Wraps the value into `[0, length)`.
    fn wrap_len(self, length: Self) -> Self;
}

#[allow(clippy::float_cmp)]
impl FloatExt for f64 {
    #[inline]
    fn deg_to_rad(self) -> Self {
        self * (TAU_F64 / 360.0)
    }

    #[inline]
    fn rad_to_deg(self) -> Self {
        self * (360.0 / TAU_F64)
    }

    #[inline]
    fn round_to(self, nearest: Self) -> Self {
        (self / nearest).round_ties_even() * nearest
    }

    #[inline]
    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    #[inline]
    fn is_even(self) -> bool {
        self % 2.0 == 0.0
    }

    #[inline]
    fn is_odd(self) -> bool {
        self.is_finite() && !self.is_even()
    }

    fn sign(self) -> i32 {
        if self > 0.0 {
            1
        } else if self < 0.0 {
            -1
        } else {
            0
        }
    }

    #[inline]
    fn wrap(self, low: Self, high: Self) -> Self {
        let range = high - low;
        let wrapped = ((self - low) % range + range) % range + low;
        if wrapped >= high {
            low
        } else {
            wrapped
        }
    }

    #[inline]
    fn wrap_len(self, length: Self) -> Self {
        self.wrap(0.0, length)
    }
}

#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
impl FloatExt for f32 {
    #[inline]
    fn deg_to_rad(self) -> Self {
        crate::math::deg_to_rad(self)
    }

    #[inline]
    fn rad_to_deg(self) -> Self {
        crate::math::rad_to_deg(self)
    }

    #[inline]
    fn round_to(self, nearest: Self) -> Self {
        (self / nearest).round_ties_even() * nearest
    }

    #[inline]
    fn saturate(self) -> Self {
        self.clamp(0.0, 1.0)
    }

    #[inline]
    fn is_even(self) -> bool {
        self % 2.0 == 0.0
    }

    #[inline]
    fn is_odd(self) -> bool {
        self.is_finite() && !self.is_even()
    }

    fn sign(self) -> i32 {
        f64::from(self).sign()
    }

    #[inline]
    fn wrap(self, low: Self, high: Self) -> Self {
        let wrapped = f64::from(self).wrap(f64::from(low), f64::from(high)) as Self;
        if wrapped >= high {
            low
        } else {
            wrapped
        }
    }

    #[inline]
    fn wrap_len(self, length: Self) -> Self {
        self.wrap(0.0, length)
    }
}
