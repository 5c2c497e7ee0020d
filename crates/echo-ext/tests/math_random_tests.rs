// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};

use echo_ext::math::{self, Prng, Quat, Vec2, Vec3, Vec4, VectorExt};
use echo_ext::random::RandomExt;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn approx_eq(a: f32, b: f32) {
    let diff = (a - b).abs();
    assert!(diff <= 1e-5, "expected {b}, got {a} (diff {diff})");
}

fn approx_eq4(a: [f32; 4], b: [f32; 4]) {
    for (x, y) in a.into_iter().zip(b) {
        approx_eq(x, y);
    }
}

#[test]
fn vec3_normalize_degenerate_returns_zero() {
    let v = Vec3::new(1e-12, -1e-12, 0.0);
    assert_eq!(v.normalize(), Vec3::ZERO);
}

#[test]
fn vector_basics() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(a.add(&b).to_array(), [5.0, 7.0, 9.0]);
    assert_eq!(b.sub(&a).to_array(), [3.0, 3.0, 3.0]);
    assert_eq!(a.dot(&b), 32.0);
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(a.min(&b), a);
    assert_eq!(a.max(&b), b);

    assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Vec4::new(1.0, 1.0, 1.0, 1.0).length(), 2.0);
    approx_eq(Vec2::new(0.0, 9.0).normalize().y(), 1.0);
}

#[test]
fn vector_ext_helpers() {
    let v = Vec4::new(1.2, 3.7, -2.5, 0.26);
    assert_eq!(v.round_to(1.0).to_tuple(), (1.0, 4.0, -2.0, 0.0));
    assert_eq!(v.round_to(0.5).to_tuple(), (1.0, 3.5, -2.5, 0.5));
    assert_eq!(v.with_x(0.0).x(), 0.0);
    assert_eq!(v.with_y(8.0).y(), 8.0);
    assert_eq!(v.with_z(8.0).z(), 8.0);
    assert_eq!(v.with_w(8.0).w(), 8.0);
    assert_eq!(Vec2::new(1.0, 2.0).to_tuple(), (1.0, 2.0));
    assert_eq!(Vec3::ONE.with_z(0.0), Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn deg_rad_roundtrip_basic_angles() {
    for deg in [0.0f32, 45.0, 90.0, 180.0, -90.0] {
        approx_eq(math::rad_to_deg(math::deg_to_rad(deg)), deg);
    }
    assert_eq!(math::clamp(5.0, 0.0, 1.0), 1.0);
}

#[test]
fn yaw_pitch_roll_matches_axis_angle() {
    approx_eq4(
        Quat::from_yaw_pitch_roll(FRAC_PI_2, 0.0, 0.0).to_array(),
        Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2).to_array(),
    );
    approx_eq4(
        Quat::from_yaw_pitch_roll(0.0, FRAC_PI_2, 0.0).to_array(),
        Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2).to_array(),
    );
    approx_eq4(
        Quat::from_yaw_pitch_roll(0.0, 0.0, PI).to_array(),
        Quat::from_axis_angle(Vec3::UNIT_Z, PI).to_array(),
    );
}

#[test]
fn quat_normalize_and_identity() {
    let q = Quat::new(0.0, 0.0, 0.0, 2.0).normalize();
    assert_eq!(q, Quat::identity());
    assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    assert_eq!(Quat::default(), Quat::IDENTITY);
    let id = Quat::identity();
    assert_eq!(id.multiply(&id), id);
}

#[test]
fn prng_is_reproducible_through_rand_api() {
    let mut a = Prng::seed_from_u64(42);
    let mut b = Prng::from_seed_u64(42);
    let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..100)).collect();
    let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..100)).collect();
    assert_eq!(xs, ys);
    assert!(xs.iter().all(|&x| x < 100));
}

#[test]
fn next_int_handles_negative_ranges() {
    let mut prng = Prng::from_seeds(123, 456);
    for _ in 0..32 {
        let v = prng.next_int(-10, -3);
        assert!((-10..=-3).contains(&v));
    }
}

#[test]
fn random_vectors_are_unit_length() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..256 {
        approx_eq(rng.next_unit_vector2().length(), 1.0);
        approx_eq(rng.next_unit_vector3().length(), 1.0);
        approx_eq(rng.next_rotation().length(), 1.0);
        approx_eq(rng.next_rotation_uniform().length(), 1.0);
    }
}

#[test]
fn next_f32_in_respects_bounds() {
    let mut rng = Prng::from_seed_u64(1);
    for _ in 0..256 {
        let v = rng.next_f32_in(-2.0, 3.0);
        assert!((-2.0..3.0).contains(&v));
    }
}

#[test]
fn random_helpers_are_deterministic_per_seed() {
    let mut a = Prng::from_seed_u64(77);
    let mut b = Prng::from_seed_u64(77);
    assert_eq!(a.next_rotation_uniform(), b.next_rotation_uniform());
    assert_eq!(a.next_unit_vector3(), b.next_unit_vector3());
}

proptest! {
    #[test]
    fn prng_next_f32_stays_in_unit_interval(seed in any::<u64>()) {
        let mut prng = Prng::from_seed_u64(seed);
        for _ in 0..16 {
            let v = prng.next_f32();
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn normalized_vectors_have_unit_length(x in -1.0e3_f32..1.0e3, y in -1.0e3_f32..1.0e3, z in 1.0_f32..1.0e3) {
        let n = Vec3::new(x, y, z).normalize();
        prop_assert!((n.length() - 1.0).abs() < 1e-4);
    }
}
