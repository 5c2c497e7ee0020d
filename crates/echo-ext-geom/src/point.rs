// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use echo_ext::math::Vec2;

/// Integer point in 2D space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts to a float vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl From<Point> for Vec2 {
    fn from(value: Point) -> Self {
        value.to_vec2()
    }
}

/// Integer width and height.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `(width, height)` as a point.
    pub const fn to_point(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// `(width, height)` as a float vector.
    pub fn to_vec2(self) -> Vec2 {
        self.to_point().to_vec2()
    }
}
