// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for the echo-ext-geom value types.

use core::cmp::Ordering;
use core::f32::consts::PI;

use echo_ext::math::{Vec2, Vec3};
use echo_ext_geom::{Aabb, Line, Line2, Line3, Point, Polygon, Polyhedron, Size, Sphere};
use proptest::prelude::*;

#[test]
fn sphere_measurements() {
    let s = Sphere::from_xyz(1.0, 2.0, 3.0, 2.0);
    assert_eq!(s.center(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(s.diameter(), 4.0);
    assert_eq!(s.circumference(), 4.0 * PI);
    assert!((s.volume() - 32.0 / 3.0 * PI).abs() < 1e-4);
    assert!((s.surface_area() - 16.0 * PI).abs() < 1e-4);
    assert_eq!(Sphere::UNIT.radius(), 1.0);
    assert_eq!(Sphere::EMPTY.volume(), 0.0);
}

#[test]
fn sphere_bounds_use_radius_magnitude() {
    let b = Sphere::new(Vec3::new(1.0, 0.0, 0.0), -2.0).bounds();
    assert_eq!(b.min().to_array(), [-1.0, -2.0, -2.0]);
    assert_eq!(b.max().to_array(), [3.0, 2.0, 2.0]);
}

#[test]
fn sphere_orders_by_radius_then_center() {
    let small = Sphere::new(Vec3::new(9.0, 9.0, 9.0), 1.0);
    let big = Sphere::new(Vec3::ZERO, 2.0);
    assert!(small < big);
    let left = Sphere::new(Vec3::new(-1.0, 0.0, 0.0), 2.0);
    assert_eq!(left.partial_cmp(&big), Some(Ordering::Less));
    assert_eq!(big.partial_cmp(&big), Some(Ordering::Equal));
    assert_ne!(left, big);
}

#[test]
fn line2_constants_and_lengths() {
    assert_eq!(Line2::EMPTY.length(), 0.0);
    assert_eq!(Line2::UNIT_X.length(), 1.0);
    assert_eq!(Line2::UNIT_Y.length_squared(), 1.0);
    assert_eq!(Line2::ONE.length_squared(), 2.0);
    let l = Line2::new(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
    assert_eq!(l.length(), 5.0);
    assert!(Line2::UNIT_X < Line2::ONE);
    assert_eq!(Line2::UNIT_Y.partial_cmp(&Line2::UNIT_X), Some(Ordering::Less));
}

#[test]
fn line_conversions() {
    let int = Line::new(Point::new(0, 0), Point::new(3, 4));
    assert_eq!(int.length_squared(), 25);
    assert_eq!(int.length(), 5.0);
    let float = Line2::from(int);
    assert_eq!(float.end, Vec2::new(3.0, 4.0));

    let spatial = Line3::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 6.0, 3.0));
    assert_eq!(spatial.length(), 5.0);
    let flat = Line2::from(spatial);
    assert_eq!(flat, Line2::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)));
    assert_eq!(Line3::from(flat).start, Vec3::new(1.0, 2.0, 0.0));
}

#[test]
fn integer_lines_sort_by_length() {
    let mut lines = vec![
        Line::new(Point::ORIGIN, Point::new(5, 0)),
        Line::new(Point::ORIGIN, Point::new(1, 0)),
        Line::new(Point::ORIGIN, Point::new(0, 3)),
    ];
    lines.sort();
    let ends: Vec<Point> = lines.iter().map(|l| l.end).collect();
    assert_eq!(ends, [Point::new(1, 0), Point::new(0, 3), Point::new(5, 0)]);
}

#[test]
fn integer_line_length_spans_full_i32_range() {
    let wide = Line::new(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
    let span = i128::from(u32::MAX);
    assert_eq!(wide.length_squared(), 2 * span * span);
    assert!(wide.length() > 6.0e9);

    let flat = Line::new(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
    let mut lines = vec![wide, flat, Line::default()];
    lines.sort();
    assert_eq!(lines, [Line::default(), flat, wide]);
}

#[test]
fn size_converts_to_point_and_vector() {
    let s = Size::new(640, 480);
    assert_eq!(s.to_point(), Point::new(640, 480));
    assert_eq!(s.to_vec2(), Vec2::new(640.0, 480.0));
    assert_eq!(Vec2::from(Point::new(-2, 7)), Vec2::new(-2.0, 7.0));
}

#[test]
fn polygon_vertex_management() {
    let mut poly = Polygon::new();
    assert_eq!(poly, Polygon::empty());
    assert_eq!(poly.vertex_count(), 0);
    assert!(poly.bounds().is_none());

    poly.add_vertex(Vec2::new(0.0, 0.0));
    poly.add_vertices([Vec2::new(2.0, 0.0), Vec2::new(1.0, 3.0)]);
    assert_eq!(poly.vertex_count(), 3);
    assert_eq!(poly.vertices()[2], Vec2::new(1.0, 3.0));

    let same = Polygon::from_vertices(poly.vertices().to_vec());
    assert_eq!(poly, same);
    let reversed: Polygon = poly.vertices().iter().rev().copied().collect();
    assert_ne!(poly, reversed);

    let bounds = poly.bounds();
    assert_eq!(
        bounds.map(|b| (b.min().to_array(), b.max().to_array())),
        Some(([0.0, 0.0, 0.0], [2.0, 3.0, 0.0]))
    );

    poly.clear_vertices();
    assert_eq!(poly.vertex_count(), 0);
}

#[test]
fn polyhedron_from_polygon_lies_in_plane() {
    let poly = Polygon::from_vertices([Vec2::new(1.0, 2.0), Vec2::new(-3.0, 4.0)]);
    let mut hedron = Polyhedron::from(&poly);
    assert_eq!(
        hedron.vertices(),
        [Vec3::new(1.0, 2.0, 0.0), Vec3::new(-3.0, 4.0, 0.0)]
    );
    hedron.add_vertex(Vec3::new(0.0, 0.0, 5.0));
    let b = hedron.bounds();
    assert_eq!(b.map(|b| b.max().to_array()), Some([1.0, 4.0, 5.0]));
    assert_eq!(Polyhedron::empty().bounds(), None);
}

#[test]
fn aabb_overlap_and_union() {
    let a = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    let b = Aabb::from_center_half_extents(Vec3::new(2.0, 0.0, 0.0), 1.0, 1.0, 1.0);
    let c = Aabb::from_center_half_extents(Vec3::new(5.0, 0.0, 0.0), 1.0, 1.0, 1.0);
    assert!(a.overlaps(&b));
    assert!(!a.overlaps(&c));
    let u = a.union(&c);
    assert_eq!(u.min().to_array(), [-1.0, -1.0, -1.0]);
    assert_eq!(u.max().to_array(), [6.0, 1.0, 1.0]);
    assert!(u.contains(Vec3::new(3.0, 0.5, -0.5)));
    assert_eq!(u.center(), Vec3::new(2.5, 0.0, 0.0));
}

#[test]
#[should_panic(expected = "invalid AABB")]
fn aabb_rejects_inverted_corners() {
    let _ = Aabb::new(Vec3::ONE, Vec3::ZERO);
}

#[cfg(feature = "serde")]
#[test]
fn sphere_serde_round_trip() {
    let s = Sphere::from_xyz(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&s).unwrap_or_default();
    let back: Option<Sphere> = serde_json::from_str(&json).ok();
    assert_eq!(back, Some(s));
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (-1.0e3_f32..1.0e3, -1.0e3_f32..1.0e3, -1.0e3_f32..1.0e3)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn from_points_contains_every_point(points in prop::collection::vec(vec3(), 1..32)) {
        let bounds = Aabb::from_points(&points);
        prop_assert!(bounds.is_some());
        if let Some(b) = bounds {
            prop_assert!(points.iter().all(|p| b.contains(*p)));
        }
    }

    #[test]
    fn sphere_bounds_contain_center(center in vec3(), radius in -1.0e3_f32..1.0e3) {
        let s = Sphere::new(center, radius);
        let b = s.bounds();
        prop_assert!(b.contains(center));
        prop_assert!(b.overlaps(&Sphere::new(center, 0.0).bounds()));
    }
}
