// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Integer extension methods.
//!
//! Every implementation widens to `i128`/`u128` before doing arithmetic that
//! could overflow the receiver type and narrows the result back afterwards.
//! Narrower types therefore share one code path with the 64-bit types.

use crate::error::{ExtError, Result};

/// Extension methods for the primitive integer types up to 64 bits.
///
/// # Examples
///
/// ```
/// use echo_ext::num::IntExt;
///
/// assert!(7_i32.is_prime());
/// assert_eq!(239_u32.digital_root(), 5);
/// assert_eq!((-3_i32).wrap(0, 10), 7);
/// assert_eq!(12_u16.gcd(18), 6);
/// ```
pub trait IntExt: Copy + Sized {
    /// Returns `true` when the value is evenly divisible by 2.
    fn is_even(self) -> bool;

    /// Returns `true` when the value is not evenly divisible by 2.
    fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// Returns `true` when the value is a prime number. Negative values,
    /// 0 and 1 are not prime.
    fn is_prime(self) -> bool;

    /// Returns `value!`.
    ///
    /// Fails with [`ExtError::NegativeArgument`] for negative input and with
    /// [`ExtError::Overflow`] once the result exceeds `u64` (from `21!`).
    fn factorial(self) -> Result<u64>;

    /// Recursive sum of the decimal digits of `|value|` until one digit
    /// remains. The digital root of 239 is 5 (`2+3+9 = 14`, `1+4 = 5`).
    fn digital_root(self) -> Self;

    /// Number of decimal digits in `|value|`; zero has one digit.
    fn count_digits(self) -> u32;

    /// Greatest common divisor of `|self|` and `|other|`.
    ///
    /// `gcd(0, 0)` is 0. For signed types the only unrepresentable result,
    /// `|MIN|`, saturates to `MAX`.
    fn gcd(self, other: Self) -> Self;

    /// Lowest common multiple of `|self|` and `|other|`; 0 if either is 0.
    fn lcm(self, other: Self) -> Result<Self>;

    /// Modulo that shifts a negative remainder by adding `divisor`.
    ///
    /// The `%` operator is a remainder: `-1 % 3 == -1`. This returns `2`.
    /// With a positive divisor the result is never negative; with a negative
    /// divisor a negative remainder moves further down: `(-7).modulo(-3)` is
    /// `-4`. A sum outside the type's range wraps in two's complement.
    ///
    /// # Panics
    /// Panics if `divisor` is zero, as `%` does.
    fn modulo(self, divisor: Self) -> Self;

    /// Number of times the digits of `|value|` must be multiplied together
    /// before a single digit remains.
    fn multiplicative_persistence(self) -> u32;

    /// `-1`, `0` or `1` depending on the sign of the value.
    fn sign(self) -> i32;

    /// Wraps the value into the half-open range `[low, high)`.
    ///
    /// Returns `None` when `high <= low`.
    fn checked_wrap(self, low: Self, high: Self) -> Option<Self>;

    /// Wraps the value into the half-open range `[low, high)`.
    ///
    /// # Panics
    /// Panics if `high <= low`.
    fn wrap(self, low: Self, high: Self) -> Self;

    /// Wraps the value into `[0, length)`.
    ///
    /// # Panics
    /// Panics if `length` is not positive.
    fn wrap_len(self, length: Self) -> Self;
}

fn is_prime_u128(n: u128) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u128 = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn factorial_u64(n: u64) -> Result<u64> {
    (2..=n).try_fold(1_u64, |acc, i| acc.checked_mul(i).ok_or(ExtError::Overflow))
}

fn persistence_u128(mut n: u128) -> u32 {
    let mut steps = 0;
    while n > 9 {
        let mut product: u128 = 1;
        let mut rest = n;
        while rest > 0 {
            product *= rest % 10;
            rest /= 10;
        }
        n = product;
        steps += 1;
    }
    steps
}

macro_rules! int_ext_impl {
    ($($t:ty),* $(,)?) => {$(
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            clippy::cast_sign_loss,
            clippy::cast_lossless,
            unused_comparisons
        )]
        impl IntExt for $t {
            #[inline]
            fn is_even(self) -> bool {
                self & 1 == 0
            }

            #[inline]
            fn is_prime(self) -> bool {
                let wide = self as i128;
                wide > 0 && is_prime_u128(wide as u128)
            }

            fn factorial(self) -> Result<u64> {
                let wide = self as i128;
                if wide < 0 {
                    return Err(ExtError::NegativeArgument(wide));
                }
                factorial_u64(wide as u64)
            }

            fn digital_root(self) -> Self {
                let magnitude = (self as i128).unsigned_abs();
                if magnitude == 0 {
                    return 0;
                }
                (1 + (magnitude - 1) % 9) as Self
            }

            fn count_digits(self) -> u32 {
                (self as i128)
                    .unsigned_abs()
                    .checked_ilog10()
                    .map_or(1, |d| d + 1)
            }

            fn gcd(self, other: Self) -> Self {
                let g = gcd_u128(
                    (self as i128).unsigned_abs(),
                    (other as i128).unsigned_abs(),
                );
                Self::try_from(g).unwrap_or(Self::MAX)
            }

            fn lcm(self, other: Self) -> Result<Self> {
                let a = (self as i128).unsigned_abs();
                let b = (other as i128).unsigned_abs();
                if a == 0 || b == 0 {
                    return Ok(0);
                }
                let l = (a / gcd_u128(a, b))
                    .checked_mul(b)
                    .ok_or(ExtError::Overflow)?;
                Self::try_from(l).map_err(|_| ExtError::Overflow)
            }

            #[inline]
            fn modulo(self, divisor: Self) -> Self {
                let r = (self as i128) % (divisor as i128);
                let d = divisor as i128;
                let m = if r < 0 { r + d } else { r };
                m as Self
            }

            fn multiplicative_persistence(self) -> u32 {
                persistence_u128((self as i128).unsigned_abs())
            }

            #[inline]
            fn sign(self) -> i32 {
                match (self as i128).cmp(&0) {
                    core::cmp::Ordering::Less => -1,
                    core::cmp::Ordering::Equal => 0,
                    core::cmp::Ordering::Greater => 1,
                }
            }

            fn checked_wrap(self, low: Self, high: Self) -> Option<Self> {
                let (value, low, high) = (self as i128, low as i128, high as i128);
                if high <= low {
                    return None;
                }
                Some(((value - low).rem_euclid(high - low) + low) as Self)
            }

            fn wrap(self, low: Self, high: Self) -> Self {
                assert!(low < high, "invalid wrap range: {low}..{high}");
                let (value, low_w, high_w) = (self as i128, low as i128, high as i128);
                ((value - low_w).rem_euclid(high_w - low_w) + low_w) as Self
            }

            #[inline]
            fn wrap_len(self, length: Self) -> Self {
                self.wrap(0, length)
            }
        }
    )*};
}

int_ext_impl!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_below_thirty() {
        let primes: Vec<u32> = (0..30).filter(|v: &u32| v.is_prime()).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn persistence_stops_on_zero_digit() {
        assert_eq!(persistence_u128(7), 0);
        assert_eq!(persistence_u128(39), 3);
        assert_eq!(persistence_u128(10), 1);
        assert_eq!(persistence_u128(277_777_788_888_899), 11);
    }

    #[test]
    fn factorial_overflows_past_twenty() {
        assert!(factorial_u64(20).is_ok());
        assert!(matches!(factorial_u64(21), Err(ExtError::Overflow)));
    }
}
