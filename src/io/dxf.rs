//! [DXF](https://en.wikipedia.org/wiki/AutoCAD_DXF) export.

use crate::triangulated::Triangulated3D;
use dxf::entities::{Entity, EntityType, Face3D};
use dxf::{Drawing, DxfError};

/// Export any triangulated shape to DXF, one `3DFACE` entity per triangle.
pub fn to_dxf<T: Triangulated3D>(shape: &T) -> Result<Vec<u8>, DxfError> {
    let mut drawing = Drawing::new();

    shape.visit_triangles(|tri| {
        #[allow(clippy::unnecessary_cast)]
        let face = Face3D::new(
            dxf::Point::new(
                tri[0].pos.x as f64,
                tri[0].pos.y as f64,
                tri[0].pos.z as f64,
            ),
            dxf::Point::new(
                tri[1].pos.x as f64,
                tri[1].pos.y as f64,
                tri[1].pos.z as f64,
            ),
            dxf::Point::new(
                tri[2].pos.x as f64,
                tri[2].pos.y as f64,
                tri[2].pos.z as f64,
            ),
            // 3DFACE expects four corners; repeat the last for a triangle.
            dxf::Point::new(
                tri[2].pos.x as f64,
                tri[2].pos.y as f64,
                tri[2].pos.z as f64,
            ),
        );
        drawing.add_entity(Entity::new(EntityType::Face3D(face)));
    });

    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

impl crate::solid::Solid {
    pub fn to_dxf(&self) -> Result<Vec<u8>, DxfError> {
        self::to_dxf(self)
    }
}
