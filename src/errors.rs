//! Error types, one per pipeline stage.
//!
//! No stage recovers internally: every failure aborts the run and is
//! surfaced to the caller through [`ConvertError`].

use crate::float_types::Real;
use thiserror::Error;

/// The input file could not be read or is not usable vector markup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("SVG parsing error: {0}")]
    Svg(#[from] svg::parser::Error),

    #[error("could not parse number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("input is malformed: {0}")]
    MalformedInput(String),

    #[error("path data is malformed: {0}")]
    MalformedPath(String),

    #[error("points attribute is malformed: {0}")]
    MalformedPoints(String),
}

/// The sampled outline cannot be turned into a solid.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("input contains no paths to extrude")]
    EmptyOutline,

    #[error("outline has {0} points, need at least 3")]
    TooFewPoints(usize),

    #[error("outline encloses no area")]
    DegenerateOutline,

    #[error("outline could not be triangulated")]
    TriangulationFailed,

    #[error("extrusion height must be positive, got {0}")]
    InvalidHeight(Real),
}

/// A target dimension or a current extent makes rescaling impossible.
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("{axis} must be positive, got {value}")]
    NonPositiveDimension { axis: &'static str, value: Real },

    #[error("solid has zero extent along {axis}, cannot rescale")]
    ZeroExtent { axis: &'static str },
}

/// The solid could not be written to the requested destination.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported output format `{0}`, expected stl, stla, or dxf")]
    UnsupportedFormat(String),

    #[error("output path has no file extension")]
    MissingExtension,

    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("DXF serialization failed: {0}")]
    Dxf(#[from] dxf::DxfError),
}

/// Top-level error for one conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
