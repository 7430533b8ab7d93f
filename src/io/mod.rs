//! File import/export: SVG in, STL or DXF out.

pub mod dxf;
pub mod stl;
pub mod svg;

use crate::errors::{ExportError, LoadError};
use crate::path::Path;
use crate::solid::Solid;

/// Output serialization formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Binary STL (`.stl`)
    BinaryStl,
    /// ASCII STL (`.stla`)
    AsciiStl,
    /// DXF `3DFACE` triangles (`.dxf`)
    Dxf,
}

impl ExportFormat {
    pub fn from_path(path: &std::path::Path) -> Result<Self, ExportError> {
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return Err(ExportError::MissingExtension);
        };
        match extension.to_ascii_lowercase().as_str() {
            "stl" => Ok(ExportFormat::BinaryStl),
            "stla" => Ok(ExportFormat::AsciiStl),
            "dxf" => Ok(ExportFormat::Dxf),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Read an SVG file and parse its vector paths.
pub fn load_svg(path: &std::path::Path) -> Result<Vec<Path>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    svg::paths_from_svg(&content)
}

/// Serialize `solid` to `path` in the format its extension selects.
pub fn export(solid: &Solid, path: &std::path::Path) -> Result<(), ExportError> {
    let format = ExportFormat::from_path(path)?;
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("solid");

    let bytes = match format {
        ExportFormat::BinaryStl => stl::to_stl_binary(solid, name)?,
        ExportFormat::AsciiStl => stl::to_stl_ascii(solid, name).into_bytes(),
        ExportFormat::Dxf => dxf::to_dxf(solid)?,
    };
    std::fs::write(path, bytes)?;
    Ok(())
}
