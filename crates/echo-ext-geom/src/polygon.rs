// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vertex lists in the plane and in space.

use echo_ext::math::{Vec2, Vec3};

use crate::aabb::Aabb;

/// Ordered list of planar vertices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon with no vertices.
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Alias for [`Polygon::new`].
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a polygon holding `vertices` in order.
    pub fn from_vertices<I: IntoIterator<Item = Vec2>>(vertices: I) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Appends a vertex.
    pub fn add_vertex(&mut self, vertex: Vec2) {
        self.vertices.push(vertex);
    }

    /// Appends every vertex of `vertices`.
    pub fn add_vertices<I: IntoIterator<Item = Vec2>>(&mut self, vertices: I) {
        self.vertices.extend(vertices);
    }

    /// Removes all vertices.
    pub fn clear_vertices(&mut self) {
        self.vertices.clear();
    }

    /// Bounding box in the `z = 0` plane, or `None` when empty.
    pub fn bounds(&self) -> Option<Aabb> {
        let points: Vec<Vec3> = self
            .vertices
            .iter()
            .map(|v| Vec3::new(v.x(), v.y(), 0.0))
            .collect();
        Aabb::from_points(&points)
    }
}

impl FromIterator<Vec2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

/// Ordered list of vertices in space.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyhedron {
    vertices: Vec<Vec3>,
}

impl Polyhedron {
    /// Creates a polyhedron with no vertices.
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Alias for [`Polyhedron::new`].
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a polyhedron holding `vertices` in order.
    pub fn from_vertices<I: IntoIterator<Item = Vec3>>(vertices: I) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Appends a vertex.
    pub fn add_vertex(&mut self, vertex: Vec3) {
        self.vertices.push(vertex);
    }

    /// Appends every vertex of `vertices`.
    pub fn add_vertices<I: IntoIterator<Item = Vec3>>(&mut self, vertices: I) {
        self.vertices.extend(vertices);
    }

    /// Removes all vertices.
    pub fn clear_vertices(&mut self) {
        self.vertices.clear();
    }

    /// Bounding box, or `None` when empty.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}

impl FromIterator<Vec3> for Polyhedron {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self::from_vertices(iter)
    }
}

impl From<&Polygon> for Polyhedron {
    fn from(value: &Polygon) -> Self {
        value
            .vertices
            .iter()
            .map(|v| Vec3::new(v.x(), v.y(), 0.0))
            .collect()
    }
}

impl From<Polygon> for Polyhedron {
    fn from(value: Polygon) -> Self {
        Self::from(&value)
    }
}
