//! `Solid` struct: a polygon-soup 3D mesh with a lazily computed
//! bounding box, plus the scaling that pins its extents to the requested
//! physical dimensions.

pub mod extrude;
pub mod polygon;
pub mod vertex;

pub use extrude::extrude_outline;

use crate::errors::ScaleError;
use crate::float_types::parry3d::bounding_volume::Aabb;
use crate::float_types::{EPSILON, Real};
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use polygon::Polygon;
use std::sync::OnceLock;
use vertex::Vertex;

/// A 3D solid produced by extrusion. Owns its geometry exclusively until
/// exported.
#[derive(Debug, Clone)]
pub struct Solid {
    /// 3D polygons making up the closed surface
    pub polygons: Vec<Polygon>,

    /// Lazily calculated AABB that spans `polygons`.
    pub bounding_box: OnceLock<Aabb>,
}

impl Solid {
    pub const fn new() -> Self {
        Solid {
            polygons: Vec::new(),
            bounding_box: OnceLock::new(),
        }
    }

    /// Build a Solid from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon]) -> Self {
        let mut solid = Solid::new();
        solid.polygons = polygons.to_vec();
        solid
    }

    /// Returns an [`Aabb`] indicating the 3D bounds of all `polygons`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
            let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);

            for poly in &self.polygons {
                for v in &poly.vertices {
                    mins.x = mins.x.min(v.pos.x);
                    mins.y = mins.y.min(v.pos.y);
                    mins.z = mins.z.min(v.pos.z);
                    maxs.x = maxs.x.max(v.pos.x);
                    maxs.y = maxs.y.max(v.pos.y);
                    maxs.z = maxs.z.max(v.pos.z);
                }
            }

            // No polygons: a trivial AABB at the origin
            if mins.x > maxs.x {
                return Aabb::new(Point3::origin(), Point3::origin());
            }
            Aabb::new(mins, maxs)
        })
    }

    /// Bounding-box size along each axis.
    pub fn extents(&self) -> Vector3<Real> {
        self.bounding_box().extents()
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons.iter().map(|p| p.vertices.len()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.vertices.len().saturating_sub(2))
            .sum()
    }

    /// Scale by independent per-axis factors.
    ///
    /// Positions multiply by the factors; normals transform by the inverse
    /// factors and are renormalized, so faces keep pointing the right way
    /// under non-uniform scaling.
    pub fn scale(&self, sx: Real, sy: Real, sz: Real) -> Solid {
        let mut solid = self.clone();
        for poly in &mut solid.polygons {
            for vert in &mut poly.vertices {
                vert.pos = Point3::new(vert.pos.x * sx, vert.pos.y * sy, vert.pos.z * sz);
                let n = Vector3::new(
                    vert.normal.x / sx,
                    vert.normal.y / sy,
                    vert.normal.z / sz,
                );
                if n.norm() > EPSILON {
                    vert.normal = n.normalize();
                }
            }
        }
        solid.bounding_box = OnceLock::new();
        solid
    }

    /// Rescale so the X and Y extents equal `width` and `depth`; the Z
    /// extent (the extrusion height) is left untouched.
    pub fn scale_to(&self, width: Real, depth: Real) -> Result<Solid, ScaleError> {
        if !(width > 0.0) {
            return Err(ScaleError::NonPositiveDimension {
                axis: "width",
                value: width,
            });
        }
        if !(depth > 0.0) {
            return Err(ScaleError::NonPositiveDimension {
                axis: "depth",
                value: depth,
            });
        }

        let extents = self.extents();
        if extents.x < EPSILON {
            return Err(ScaleError::ZeroExtent { axis: "width" });
        }
        if extents.y < EPSILON {
            return Err(ScaleError::ZeroExtent { axis: "depth" });
        }

        Ok(self.scale(width / extents.x, depth / extents.y, 1.0))
    }
}

impl Default for Solid {
    fn default() -> Self {
        Self::new()
    }
}

impl Triangulated3D for Solid {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for poly in &self.polygons {
            for tri in poly.triangulate() {
                f(tri);
            }
        }
    }
}
