//! Convert a 2D vector drawing (SVG) into an extruded 3D solid.
//!
//! The pipeline is a straight line with no branch or retry points:
//! parse the SVG into parametric paths, sample each path into a 2D outline,
//! extrude the outline into a prism along +Z, rescale the X/Y extents to the
//! requested width/depth, and export to the format the output extension
//! selects.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod convert;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod path;
pub mod sample;
pub mod solid;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use convert::{Dimensions, convert, svg_to_solid};
pub use errors::ConvertError;
pub use solid::Solid;
