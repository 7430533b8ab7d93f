use crate::solid::vertex::Vertex;

/// Visitor over the triangles of a 3D shape.
///
/// This is the seam between geometry and the exporters: every output format
/// is triangle-based, so the writers only need this trait.
pub trait Triangulated3D {
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}
