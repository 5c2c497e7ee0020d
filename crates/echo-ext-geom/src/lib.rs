// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry value types built on the `echo-ext` math vectors.
//!
//! ```
//! use echo_ext::math::Vec3;
//! use echo_ext_geom::Sphere;
//!
//! let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
//! assert_eq!(sphere.diameter(), 4.0);
//! assert_eq!(sphere.bounds().min(), Vec3::new(-1.0, -2.0, -2.0));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod aabb;
mod line;
mod point;
mod polygon;
mod sphere;

pub use aabb::Aabb;
pub use line::{Line, Line2, Line3};
pub use point::{Point, Size};
pub use polygon::{Polygon, Polyhedron};
pub use sphere::Sphere;
