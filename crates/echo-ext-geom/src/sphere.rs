// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::cmp::Ordering;
use core::f32::consts::PI;

use echo_ext::math::Vec3;

use crate::aabb::Aabb;

/// Sphere described by a center and a radius.
///
/// Spheres order by radius; equal radii compare the centers component-wise.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Zero-radius sphere at the origin.
    pub const EMPTY: Self = Self::new(Vec3::ZERO, 0.0);
    /// Radius-one sphere at the origin.
    pub const UNIT: Self = Self::new(Vec3::ZERO, 1.0);

    /// Creates a sphere.
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a sphere from center coordinates.
    pub const fn from_xyz(x: f32, y: f32, z: f32, radius: f32) -> Self {
        Self::new(Vec3::new(x, y, z), radius)
    }

    /// Center point.
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius.
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// `2πr`.
    pub fn circumference(&self) -> f32 {
        2.0 * PI * self.radius
    }

    /// `2r`.
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    /// `4/3·πr³`.
    pub fn volume(&self) -> f32 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    /// `4πr²`.
    pub fn surface_area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }

    /// Tight axis-aligned box. A negative radius is treated by magnitude.
    ///
    /// # Panics
    /// Panics if the radius or center is NaN.
    pub fn bounds(&self) -> Aabb {
        let r = self.radius.abs();
        Aabb::from_center_half_extents(self.center, r, r, r)
    }
}

impl PartialOrd for Sphere {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.radius.partial_cmp(&other.radius)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        let a = self.center.to_array();
        let b = other.center.to_array();
        for (x, y) in a.iter().zip(&b) {
            match x.partial_cmp(y)? {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        Some(Ordering::Equal)
    }
}
