//! Discretization of paths into one polygon outline.

use crate::float_types::Real;
use crate::path::Path;
use nalgebra::Point2;

/// Concatenate `count` uniform samples from every path into a single ring.
///
/// No deduplication happens across path boundaries: disjoint sub-paths are
/// flattened into one outline. Multi-contour inputs (letters with holes,
/// nested shapes) therefore come out as a single self-overlapping ring.
pub fn outline(paths: &[Path], count: usize) -> Vec<Point2<Real>> {
    let mut ring = Vec::with_capacity(paths.len() * count);
    for path in paths {
        ring.extend(path.sample(count));
    }
    ring
}
