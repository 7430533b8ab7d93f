//! [STL](https://en.wikipedia.org/wiki/STL_(file_format)) export/import.

use crate::float_types::Real;
use crate::solid::Solid;
use crate::solid::polygon::Polygon;
use crate::solid::vertex::Vertex;
use crate::triangulated::Triangulated3D;
use std::io::Cursor;
use nalgebra::{Point3, Vector3};

/// Convert any triangulated shape to an **ASCII STL** string with the given
/// `name`.
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Convert any triangulated shape to a **binary STL** byte vector.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.pos;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Read STL data (binary or ASCII) back into a [`Solid`], one triangle per
/// polygon. Used for round-trip verification of exported files.
pub fn from_stl(stl_data: &[u8]) -> std::io::Result<Solid> {
    let mut cursor = Cursor::new(stl_data);
    let stl_reader = stl_io::create_stl_reader(&mut cursor)?;

    let mut polygons = Vec::new();
    for tri_result in stl_reader {
        let tri = tri_result?;
        let normal = Vector3::new(
            tri.normal[0] as Real,
            tri.normal[1] as Real,
            tri.normal[2] as Real,
        );
        let vertices = tri
            .vertices
            .iter()
            .map(|v| {
                Vertex::new(
                    Point3::new(v[0] as Real, v[1] as Real, v[2] as Real),
                    normal,
                )
            })
            .collect();
        polygons.push(Polygon::new(vertices));
    }

    Ok(Solid::from_polygons(&polygons))
}

impl Solid {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }

    pub fn from_stl(stl_data: &[u8]) -> std::io::Result<Solid> {
        self::from_stl(stl_data)
    }
}
