// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use echo_ext::num::{self, FloatExt, IntExt};
use echo_ext::ExtError;
use proptest::prelude::*;

fn approx_eq(a: f64, b: f64) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-6, "expected {b}, got {a} (diff {diff})");
}

#[test]
fn wrap_moves_values_into_half_open_range() {
    assert_eq!(5_i32.wrap(10, 20), 15);
    assert_eq!(20_i32.wrap(10, 20), 10);
    assert_eq!(10_i32.wrap(10, 20), 10);
    assert_eq!((-3_i32).wrap(0, 10), 7);
    assert_eq!(15_i32.wrap_len(10), 5);
    assert_eq!(250_u8.wrap(0, 200), 50);
    assert_eq!(i64::MIN.wrap(-1, 1), 0);
}

#[test]
fn checked_wrap_rejects_empty_range() {
    assert_eq!(5_i32.checked_wrap(10, 10), None);
    assert_eq!(5_u16.checked_wrap(20, 10), None);
    assert_eq!(25_u16.checked_wrap(10, 20), Some(15));
}

#[test]
#[should_panic(expected = "invalid wrap range")]
fn wrap_panics_on_empty_range() {
    let _ = 1_i32.wrap(3, 3);
}

#[test]
fn digital_root_of_known_values() {
    assert_eq!(239_i32.digital_root(), 5);
    assert_eq!((-239_i32).digital_root(), 5);
    assert_eq!(9_u8.digital_root(), 9);
    assert_eq!(18_u64.digital_root(), 9);
    assert_eq!(0_i16.digital_root(), 0);
    assert_eq!(i8::MIN.digital_root(), 2);
}

#[test]
fn count_digits_uses_magnitude() {
    assert_eq!(0_i32.count_digits(), 1);
    assert_eq!(12_345_u32.count_digits(), 5);
    assert_eq!((-99_i64).count_digits(), 2);
    assert_eq!(u64::MAX.count_digits(), 20);
    assert_eq!(i64::MIN.count_digits(), 19);
}

#[test]
fn gcd_and_lcm() {
    assert_eq!(12_i32.gcd(18), 6);
    assert_eq!((-12_i32).gcd(18), 6);
    assert_eq!(0_u32.gcd(7), 7);
    assert_eq!(0_u32.gcd(0), 0);
    assert_eq!(i8::MIN.gcd(0), i8::MAX);

    assert_eq!(4_i32.lcm(6).ok(), Some(12));
    assert_eq!((-4_i32).lcm(6).ok(), Some(12));
    assert_eq!(0_i32.lcm(5).ok(), Some(0));
    assert!(matches!(200_u8.lcm(3), Err(ExtError::Overflow)));
}

#[test]
fn modulo_is_never_negative() {
    assert_eq!((-1_i32).modulo(3), 2);
    assert_eq!(7_i32.modulo(3), 1);
    assert_eq!((-7_i32).modulo(-3), -4);
    assert_eq!(7_i32.modulo(-3), 1);
    assert_eq!(7_u32.modulo(3), 1);
    assert_eq!((-6_i64).modulo(3), 0);
}

#[test]
fn factorial_bounds() {
    assert_eq!(0_i32.factorial().ok(), Some(1));
    assert_eq!(5_u8.factorial().ok(), Some(120));
    assert_eq!(20_u64.factorial().ok(), Some(2_432_902_008_176_640_000));
    assert!(matches!(21_u64.factorial(), Err(ExtError::Overflow)));
    assert!(matches!(
        (-1_i32).factorial(),
        Err(ExtError::NegativeArgument(-1))
    ));
}

#[test]
fn primality_and_parity() {
    assert!(2_i32.is_prime());
    assert!(!1_i32.is_prime());
    assert!(!(-7_i32).is_prime());
    assert!(7_919_u32.is_prime());
    assert!(1_000_000_007_u64.is_prime());
    assert!(!1_000_000_008_u64.is_prime());
    assert!(4_i32.is_even());
    assert!((-3_i32).is_odd());
    assert!(0_u8.is_even());
}

#[test]
fn persistence_and_sign() {
    assert_eq!(39_i32.multiplicative_persistence(), 3);
    assert_eq!(999_u32.multiplicative_persistence(), 4);
    assert_eq!((-39_i32).multiplicative_persistence(), 3);
    assert_eq!(5_u8.multiplicative_persistence(), 0);
    assert_eq!((-4_i32).sign(), -1);
    assert_eq!(0_i32.sign(), 0);
    assert_eq!(u64::MAX.sign(), 1);
}

#[test]
fn float_helpers() {
    assert_eq!(25.0_f32.wrap(10.0, 20.0), 15.0);
    assert_eq!(5.0_f64.wrap(10.0, 20.0), 15.0);
    assert_eq!(12.5_f64.wrap_len(10.0), 2.5);
    assert!(1.0_f64.wrap(3.0, 3.0).is_nan());
    assert_eq!((-1.0e-9_f32).wrap(0.0, 1.0), 0.0);
    assert_eq!((-1.0e-20_f64).wrap(0.0, 1.0), 0.0);
    approx_eq(180.0_f64.deg_to_rad(), core::f64::consts::PI);
    approx_eq(core::f64::consts::FRAC_PI_2.rad_to_deg(), 90.0);
    assert_eq!((-1.0_f32).saturate(), 0.0);
    assert_eq!(2.0_f32.saturate(), 1.0);
    assert_eq!(7.3_f64.round_to(0.5), 7.5);
    assert_eq!(2.5_f64.round_to(1.0), 2.0);
    assert!(4.0_f32.is_even());
    assert!(3.0_f64.is_odd());
    assert!(!f64::NAN.is_odd());
    assert_eq!(f32::NAN.sign(), 0);
    assert_eq!((-0.5_f64).sign(), -1);
}

#[test]
fn interpolation_spot_values() {
    approx_eq(num::lerp(10.0, 20.0, 0.5), 15.0);
    approx_eq(num::inverse_lerp(15.0, 10.0, 20.0), 0.5);
    approx_eq(num::smooth_step(10.0, 20.0, 0.5), 15.0);
    approx_eq(num::scale_range(0.5, 0.0, 1.0, 5.0, 10.0), 7.5);
    approx_eq(num::sigmoid(0.5), 0.622_459_331);
    approx_eq(num::sawtooth(-1.5), 0.5);
    approx_eq(num::sawtooth(2.25), 0.25);
    approx_eq(num::bias(0.5, 0.3), 0.3);
    approx_eq(num::exponential_decay(100.0, 0.5, 0.1), 95.122_942_450_071_4);
    approx_eq(num::pulse(0.5, 0.0, 1.0), 1.0);
    approx_eq(num::pulse(1.5, 0.0, 1.0), 0.0);
    approx_eq(num::pulse(1.0, 0.0, 1.0), 1.0);
}

#[test]
fn gamma_conversions_invert_each_other() {
    let linear = num::gamma_to_linear(0.5, num::DEFAULT_GAMMA);
    assert!(linear < 0.5);
    approx_eq(num::linear_to_gamma(linear, num::DEFAULT_GAMMA), 0.5);
}

proptest! {
    #[test]
    fn wrap_is_idempotent(value in any::<i32>(), low in -1000_i32..1000, width in 1_i32..1000) {
        let high = low + width;
        let once = value.wrap(low, high);
        prop_assert!(once >= low && once < high);
        prop_assert_eq!(once.wrap(low, high), once);
    }

    #[test]
    fn wrap_keeps_in_range_values(low in -1000_i64..1000, offset in 0_i64..500, extra in 1_i64..500) {
        let value = low + offset;
        prop_assert_eq!(value.wrap(low, value + extra), value);
    }

    #[test]
    fn float_wrap_lands_in_range(value in -1.0e6_f64..1.0e6, low in -100.0_f64..100.0, width in 0.5_f64..100.0) {
        let wrapped = value.wrap(low, low + width);
        prop_assert!(wrapped >= low && wrapped < low + width);
    }

    #[test]
    fn f32_wrap_lands_in_range(value in -1.0e4_f32..1.0e4, low in -100.0_f32..100.0, width in 0.5_f32..100.0) {
        let high = low + width;
        let wrapped = value.wrap(low, high);
        prop_assert!(wrapped >= low && wrapped < high);
    }

    #[test]
    fn modulo_stays_below_divisor(value in any::<i32>(), divisor in 1_i32..10_000) {
        let m = value.modulo(divisor);
        prop_assert!((0..divisor).contains(&m));
    }

    #[test]
    fn gcd_divides_both(a in 1_u32..100_000, b in 1_u32..100_000) {
        let g = a.gcd(b);
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }
}
