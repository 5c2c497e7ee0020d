// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Line segments in integer 2D, float 2D and float 3D space.
//!
//! Segments order by squared length. Equal lengths fall back to comparing the
//! endpoints so that `Ordering::Equal` coincides with `==`.

use core::cmp::Ordering;

use echo_ext::math::{Vec2, Vec3};

use crate::point::Point;

fn cmp_components(a: &[f32], b: &[f32]) -> Option<Ordering> {
    for (x, y) in a.iter().zip(b) {
        match x.partial_cmp(y)? {
            Ordering::Equal => {}
            other => return Some(other),
        }
    }
    Some(Ordering::Equal)
}

/// Segment between two integer points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Line {
    /// Creates a segment.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Squared length, exact for every pair of `i32` endpoints.
    pub fn length_squared(&self) -> i128 {
        let dx = i128::from(self.end.x) - i128::from(self.start.x);
        let dy = i128::from(self.end.y) - i128::from(self.start.y);
        dx * dx + dy * dy
    }

    /// Euclidean length.
    #[allow(clippy::cast_precision_loss)]
    pub fn length(&self) -> f64 {
        (self.length_squared() as f64).sqrt()
    }
}

impl PartialOrd for Line {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Line {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length_squared()
            .cmp(&other.length_squared())
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

/// Segment between two points in the plane.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line2 {
    /// First endpoint.
    pub start: Vec2,
    /// Second endpoint.
    pub end: Vec2,
}

impl Line2 {
    /// Zero-length segment at the origin.
    pub const EMPTY: Self = Self::new(Vec2::ZERO, Vec2::ZERO);
    /// Origin to `(1, 1)`.
    pub const ONE: Self = Self::new(Vec2::ZERO, Vec2::ONE);
    /// Origin to `(1, 0)`.
    pub const UNIT_X: Self = Self::new(Vec2::ZERO, Vec2::UNIT_X);
    /// Origin to `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(Vec2::ZERO, Vec2::UNIT_Y);

    /// Creates a segment.
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        self.end.sub(&self.start).length_squared()
    }
}

impl PartialOrd for Line2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.length_squared().partial_cmp(&other.length_squared())? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match cmp_components(&self.start.to_array(), &other.start.to_array())? {
            Ordering::Equal => cmp_components(&self.end.to_array(), &other.end.to_array()),
            ord => Some(ord),
        }
    }
}

impl From<Line> for Line2 {
    fn from(value: Line) -> Self {
        Self::new(value.start.to_vec2(), value.end.to_vec2())
    }
}

/// Drops the Z component of both endpoints.
impl From<Line3> for Line2 {
    fn from(value: Line3) -> Self {
        Self::new(
            Vec2::new(value.start.x(), value.start.y()),
            Vec2::new(value.end.x(), value.end.y()),
        )
    }
}

/// Segment between two points in 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line3 {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
}

impl Line3 {
    /// Zero-length segment at the origin.
    pub const EMPTY: Self = Self::new(Vec3::ZERO, Vec3::ZERO);

    /// Creates a segment.
    pub const fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Euclidean length.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length.
    pub fn length_squared(&self) -> f32 {
        self.end.sub(&self.start).length_squared()
    }
}

impl PartialOrd for Line3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.length_squared().partial_cmp(&other.length_squared())? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match cmp_components(&self.start.to_array(), &other.start.to_array())? {
            Ordering::Equal => cmp_components(&self.end.to_array(), &other.end.to_array()),
            ord => Some(ord),
        }
    }
}

/// Places the segment in the `z = 0` plane.
impl From<Line2> for Line3 {
    fn from(value: Line2) -> Self {
        Self::new(
            Vec3::new(value.start.x(), value.start.y(), 0.0),
            Vec3::new(value.end.x(), value.end.y(), 0.0),
        )
    }
}
