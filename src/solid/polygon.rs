//! Flat convex polygons, the faces a [`Solid`](super::Solid) is built from.

use super::vertex::Vertex;

/// A flat convex polygon.
///
/// Extrusion only ever produces cap triangles and side quads, so convexity
/// holds by construction and a fan triangulation is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        debug_assert!(vertices.len() >= 3, "polygon needs at least 3 vertices");
        Polygon { vertices }
    }

    /// Fan triangulation around the first vertex.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        let mut triangles = Vec::with_capacity(self.vertices.len().saturating_sub(2));
        for i in 1..self.vertices.len().saturating_sub(1) {
            triangles.push([
                self.vertices[0].clone(),
                self.vertices[i].clone(),
                self.vertices[i + 1].clone(),
            ]);
        }
        triangles
    }

    /// Reverse winding and flip all vertex normals.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for vertex in &mut self.vertices {
            vertex.flip();
        }
    }
}
