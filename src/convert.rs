//! The conversion pipeline: Load → Sample → Extrude → Scale → Export.
//! Strictly sequential; the first failing stage aborts the run.

use crate::errors::{ConvertError, GeometryError, ScaleError};
use crate::float_types::Real;
use crate::io;
use crate::sample;
use crate::solid::{Solid, extrude_outline};

/// Samples taken along each path.
pub const SAMPLES_PER_PATH: usize = 100;

/// Target bounding-box sizes in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// X extent
    pub width: Real,
    /// Y extent
    pub depth: Real,
    /// Z extent, set by extrusion rather than rescaling
    pub height: Real,
}

impl Dimensions {
    pub const fn new(width: Real, depth: Real, height: Real) -> Self {
        Dimensions {
            width,
            depth,
            height,
        }
    }

    /// All three dimensions must be positive before any file or geometry
    /// work starts.
    pub fn validate(&self) -> Result<(), ScaleError> {
        for (axis, value) in [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ] {
            if !(value > 0.0) {
                return Err(ScaleError::NonPositiveDimension { axis, value });
            }
        }
        Ok(())
    }
}

/// Build the scaled solid for `input` without writing anything to disk.
pub fn svg_to_solid(
    input: &std::path::Path,
    dimensions: &Dimensions,
) -> Result<Solid, ConvertError> {
    dimensions.validate()?;

    let paths = io::load_svg(input)?;
    if paths.is_empty() {
        return Err(GeometryError::EmptyOutline.into());
    }

    let ring = sample::outline(&paths, SAMPLES_PER_PATH);
    let solid = extrude_outline(&ring, dimensions.height)?;
    let solid = solid.scale_to(dimensions.width, dimensions.depth)?;
    Ok(solid)
}

/// Full pipeline: parse, sample, extrude, rescale, and write `output`.
pub fn convert(
    input: &std::path::Path,
    dimensions: &Dimensions,
    output: &std::path::Path,
) -> Result<(), ConvertError> {
    let solid = svg_to_solid(input, dimensions)?;
    io::export(&solid, output)?;
    Ok(())
}
