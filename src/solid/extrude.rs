//! Linear extrusion of a sampled outline into a closed prism.

use super::Solid;
use super::polygon::Polygon;
use super::vertex::Vertex;
use crate::errors::GeometryError;
use crate::float_types::{EPSILON, Real};
use geo::{Area, Coord, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use nalgebra::{Point2, Point3, Vector3};

/// Ear-cut triangulation of a simple ring, embedded at z=0.
fn triangulate_ring(polygon: &GeoPolygon<Real>) -> Vec<[Point3<Real>; 3]> {
    let triangulation = polygon.earcut_triangles_raw();
    let vertices = triangulation.vertices;

    let mut result = Vec::with_capacity(triangulation.triangle_indices.len() / 3);
    for tri in triangulation.triangle_indices.chunks_exact(3) {
        result.push([
            Point3::new(vertices[2 * tri[0]], vertices[2 * tri[0] + 1], 0.0),
            Point3::new(vertices[2 * tri[1]], vertices[2 * tri[1] + 1], 0.0),
            Point3::new(vertices[2 * tri[2]], vertices[2 * tri[2] + 1], 0.0),
        ]);
    }
    result
}

/// Extrude a polygon outline along +Z into a closed solid of the given
/// height: a triangulated bottom cap at z=0, a matching top cap at
/// z=`height`, and one quad per outline edge.
pub fn extrude_outline(
    outline: &[Point2<Real>],
    height: Real,
) -> Result<Solid, GeometryError> {
    if outline.len() < 3 {
        return Err(GeometryError::TooFewPoints(outline.len()));
    }
    if !(height > EPSILON) {
        return Err(GeometryError::InvalidHeight(height));
    }

    let coords: Vec<Coord<Real>> = outline
        .iter()
        .map(|p| Coord { x: p.x, y: p.y })
        .collect();
    let polygon = GeoPolygon::new(LineString::new(coords), Vec::new());
    if polygon.signed_area().abs() < EPSILON {
        return Err(GeometryError::DegenerateOutline);
    }

    // Work on a counter-clockwise ring so side normals face outward.
    let mut ring: Vec<Point2<Real>> = outline.to_vec();
    if polygon.signed_area() < 0.0 {
        ring.reverse();
    }
    let oriented = GeoPolygon::new(
        LineString::new(ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect()),
        Vec::new(),
    );

    let cap = triangulate_ring(&oriented);
    if cap.is_empty() {
        return Err(GeometryError::TriangulationFailed);
    }

    let direction = Vector3::new(0.0, 0.0, height);
    let mut polygons = Vec::with_capacity(2 * cap.len() + ring.len());

    // Bottom cap, flipped so its normals point down.
    for tri in &cap {
        let mut bottom = Polygon::new(vec![
            Vertex::new(tri[0], Vector3::z()),
            Vertex::new(tri[1], Vector3::z()),
            Vertex::new(tri[2], Vector3::z()),
        ]);
        bottom.flip();
        polygons.push(bottom);
    }
    // Top cap.
    for tri in &cap {
        polygons.push(Polygon::new(vec![
            Vertex::new(tri[0] + direction, Vector3::z()),
            Vertex::new(tri[1] + direction, Vector3::z()),
            Vertex::new(tri[2] + direction, Vector3::z()),
        ]));
    }
    // One quad per ring edge; zero-length edges (repeated samples at
    // path joins) contribute nothing.
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        let edge = b - a;
        if edge.norm() < EPSILON {
            continue;
        }
        // Outward normal of a CCW ring edge.
        let normal = Vector3::new(edge.y, -edge.x, 0.0).normalize();
        let bottom_a = Point3::new(a.x, a.y, 0.0);
        let bottom_b = Point3::new(b.x, b.y, 0.0);
        polygons.push(Polygon::new(vec![
            Vertex::new(bottom_a, normal),
            Vertex::new(bottom_b, normal),
            Vertex::new(bottom_b + direction, normal),
            Vertex::new(bottom_a + direction, normal),
        ]));
    }

    Ok(Solid::from_polygons(&polygons))
}
