// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar interpolation and shaping helpers.
//!
//! Every function is generic over [`Real`], implemented for `f32` and `f64`,
//! and performs no clamping unless stated.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Gamma exponent of the common sRGB approximation.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Floating-point scalar surface the interpolation helpers depend on.
pub trait Real:
    Copy
    + core::fmt::Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `2`.
    const TWO: Self;
    /// `3`.
    const THREE: Self;

    /// `e^self`.
    fn exp(self) -> Self;
    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;
    /// `self^exponent`.
    fn powf(self, exponent: Self) -> Self;
    /// Restricts `self` to `[min, max]`.
    fn clamp(self, min: Self, max: Self) -> Self;
}

macro_rules! real_impl {
    ($($t:ty),*) => {$(
        impl Real for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const THREE: Self = 3.0;

            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn powf(self, exponent: Self) -> Self {
                <$t>::powf(self, exponent)
            }

            #[inline]
            fn clamp(self, min: Self, max: Self) -> Self {
                <$t>::clamp(self, min, max)
            }
        }
    )*};
}

real_impl!(f32, f64);

/// Linear interpolation from `value` to `target`: `(1 - alpha) * value + alpha * target`.
///
/// ```
/// assert_eq!(echo_ext::num::lerp(10.0_f32, 20.0, 0.5), 15.0);
/// ```
#[inline]
pub fn lerp<T: Real>(value: T, target: T, alpha: T) -> T {
    (T::ONE - alpha) * value + alpha * target
}

/// Position of `alpha` between `start` and `end` as a fraction; 0 when the
/// range is empty.
#[inline]
pub fn inverse_lerp<T: Real>(alpha: T, start: T, end: T) -> T {
    if start == end {
        return T::ZERO;
    }
    (alpha - start) / (end - start)
}

/// Hermite interpolation between `value` and `target`. `alpha` is clamped to
/// `[0, 1]`.
#[inline]
pub fn smooth_step<T: Real>(value: T, target: T, alpha: T) -> T {
    let a = alpha.clamp(T::ZERO, T::ONE);
    let a = -T::TWO * a * a * a + T::THREE * a * a;
    target * a + value * (T::ONE - a)
}

/// Maps `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
#[inline]
pub fn scale_range<T: Real>(value: T, old_min: T, old_max: T, new_min: T, new_max: T) -> T {
    let old_range = old_max - old_min;
    let new_range = new_max - new_min;
    (value - old_min) * new_range / old_range + new_min
}

/// Logistic function `1 / (1 + e^-value)`.
#[inline]
pub fn sigmoid<T: Real>(value: T) -> T {
    T::ONE / (T::ONE + (-value).exp())
}

/// Fractional part measured from the floor, so `sawtooth(-1.5) == 0.5`.
#[inline]
pub fn sawtooth<T: Real>(value: T) -> T {
    value - value.floor()
}

/// `1` when `lower <= value <= upper`, otherwise `0`.
#[inline]
pub fn pulse<T: Real>(value: T, lower: T, upper: T) -> T {
    if lower <= value && value <= upper {
        T::ONE
    } else {
        T::ZERO
    }
}

/// Schlick's bias curve. `bias(0.5, b) == b`.
#[inline]
pub fn bias<T: Real>(value: T, bias: T) -> T {
    value / ((T::ONE / bias - T::TWO) * (T::ONE - value) + T::ONE)
}

/// `value * e^(-decay * alpha)`.
#[inline]
pub fn exponential_decay<T: Real>(value: T, alpha: T, decay: T) -> T {
    value * (-decay * alpha).exp()
}

/// Converts a gamma-encoded component to linear space: `value^gamma`.
#[inline]
pub fn gamma_to_linear<T: Real>(value: T, gamma: T) -> T {
    value.powf(gamma)
}

/// Converts a linear component to gamma space: `value^(1 / gamma)`.
#[inline]
pub fn linear_to_gamma<T: Real>(value: T, gamma: T) -> T {
    value.powf(T::ONE / gamma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_step_clamps_alpha() {
        assert!((smooth_step(10.0_f64, 20.0, 1.5) - 20.0).abs() < 1e-12);
        assert!((smooth_step(10.0_f64, 20.0, -1.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_lerp_of_empty_range_is_zero() {
        assert!(inverse_lerp(3.0_f32, 2.0, 2.0).abs() < f32::EPSILON);
    }
}
