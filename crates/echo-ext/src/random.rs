// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Random vectors and rotations for any [`rand::Rng`].
//!
//! Helpers are deterministic for a given generator state, so a seeded
//! [`crate::math::Prng`] or `StdRng` reproduces the same sequence.

use std::f32::consts::TAU;

use rand::Rng;
use tracing::trace;

use crate::math::{Quat, Vec2, Vec3, Vec4, EPSILON};

/// Random geometry helpers.
///
/// ```
/// use echo_ext::math::Prng;
/// use echo_ext::random::RandomExt;
/// use rand::SeedableRng;
///
/// let mut rng = Prng::seed_from_u64(7);
/// let v = rng.next_unit_vector3();
/// assert!((v.length() - 1.0).abs() < 1e-5);
/// ```
pub trait RandomExt: Rng {
    /// Uniform `f32` in `[min, max)`. Reversed bounds give values in
    /// `(max, min]`.
    fn next_f32_in(&mut self, min: f32, max: f32) -> f32 {
        self.gen::<f32>().mul_add(max - min, min)
    }

    /// Point on the unit circle at a uniform angle.
    fn next_unit_vector2(&mut self) -> Vec2 {
        let (sin, cos) = (self.gen::<f32>() * TAU).sin_cos();
        Vec2::new(cos, sin)
    }

    /// Point uniformly distributed on the unit sphere.
    fn next_unit_vector3(&mut self) -> Vec3 {
        let z = self.next_f32_in(-1.0, 1.0);
        let (sin, cos) = (self.gen::<f32>() * TAU).sin_cos();
        let radius = (1.0 - z * z).max(0.0).sqrt();
        Vec3::new(radius * cos, radius * sin, z)
    }

    /// Rotation from yaw, pitch and roll each drawn from `[0, 2pi)`.
    ///
    /// Cheaper than [`RandomExt::next_rotation_uniform`] but not uniform over
    /// the rotation group.
    fn next_rotation(&mut self) -> Quat {
        let yaw = self.gen::<f32>() * TAU;
        let pitch = self.gen::<f32>() * TAU;
        let roll = self.gen::<f32>() * TAU;
        Quat::from_yaw_pitch_roll(yaw, pitch, roll)
    }

    /// Rotation uniformly distributed over the rotation group.
    ///
    /// Samples points in the 4D cube until one lands inside the unit ball
    /// (excluding the origin), then normalises it.
    fn next_rotation_uniform(&mut self) -> Quat {
        let mut rejected: u32 = 0;
        loop {
            let candidate = Vec4::new(
                self.next_f32_in(-1.0, 1.0),
                self.next_f32_in(-1.0, 1.0),
                self.next_f32_in(-1.0, 1.0),
                self.next_f32_in(-1.0, 1.0),
            );
            let norm_sq = candidate.length_squared();
            if norm_sq > EPSILON * EPSILON && norm_sq <= 1.0 {
                trace!(rejected, "sampled uniform rotation");
                return Quat::from(candidate.normalize());
            }
            rejected += 1;
        }
    }
}

impl<R: Rng + ?Sized> RandomExt for R {}
