//! SVG document loading: walk the parser events and collect an outline
//! path per drawable element.
//!
//! Supported elements: `path`, `line`, `polyline`, `polygon`, `rect`
//! (sharp corners), `circle`, and `ellipse`. Element `transform`
//! attributes are ignored; coordinates are taken as written.

use crate::errors::LoadError;
use crate::float_types::{Real, TAU};
use crate::path::data::path_from_data;
use crate::path::points::parse_points;
use crate::path::{Path, Segment};
use nalgebra::{Point2, Vector2};
use svg::node::Attributes;
use svg::node::element::path::Data;
use svg::node::element::tag::Type;
use svg::parser::Event;

/// Parse SVG markup into the paths of its drawable elements, in document
/// order.
pub fn paths_from_svg(content: &str) -> Result<Vec<Path>, LoadError> {
    let mut paths = Vec::new();

    for event in svg::read(content)? {
        match event {
            Event::Error(error) => return Err(error.into()),
            Event::Tag(name, Type::Start | Type::Empty, attributes) => {
                if let Some(path) = element_outline(name, &attributes)?
                    && !path.is_empty()
                {
                    paths.push(path);
                }
            },
            _ => {},
        }
    }

    Ok(paths)
}

fn element_outline(name: &str, attributes: &Attributes) -> Result<Option<Path>, LoadError> {
    match name {
        "path" => {
            let Some(d) = attributes.get("d") else {
                return Ok(None);
            };
            let data = Data::parse(d)?;
            path_from_data(&data).map(Some)
        },
        "polygon" | "polyline" => {
            let Some(points) = attributes.get("points") else {
                return Ok(None);
            };
            let points = parse_points(points)?;
            Ok(polyline_path(&points, name == "polygon"))
        },
        "line" => {
            let start = Point2::new(
                attribute(attributes, "x1")?.unwrap_or(0.0),
                attribute(attributes, "y1")?.unwrap_or(0.0),
            );
            let end = Point2::new(
                attribute(attributes, "x2")?.unwrap_or(0.0),
                attribute(attributes, "y2")?.unwrap_or(0.0),
            );
            Ok(Some(Path::new(vec![Segment::Line { start, end }])))
        },
        "rect" => {
            let x = attribute(attributes, "x")?.unwrap_or(0.0);
            let y = attribute(attributes, "y")?.unwrap_or(0.0);
            let width = attribute(attributes, "width")?.unwrap_or(0.0);
            let height = attribute(attributes, "height")?.unwrap_or(0.0);
            // Zero-sized rects render nothing.
            if width <= 0.0 || height <= 0.0 {
                return Ok(None);
            }
            let corners = [
                Point2::new(x, y),
                Point2::new(x + width, y),
                Point2::new(x + width, y + height),
                Point2::new(x, y + height),
            ];
            Ok(polyline_path(&corners, true))
        },
        "circle" => {
            let r = attribute(attributes, "r")?.unwrap_or(0.0);
            if r <= 0.0 {
                return Ok(None);
            }
            Ok(Some(ellipse_path(attributes, r, r)?))
        },
        "ellipse" => {
            let rx = attribute(attributes, "rx")?.unwrap_or(0.0);
            let ry = attribute(attributes, "ry")?.unwrap_or(0.0);
            if rx <= 0.0 || ry <= 0.0 {
                return Ok(None);
            }
            Ok(Some(ellipse_path(attributes, rx, ry)?))
        },
        _ => Ok(None),
    }
}

fn ellipse_path(attributes: &Attributes, rx: Real, ry: Real) -> Result<Path, LoadError> {
    let center = Point2::new(
        attribute(attributes, "cx")?.unwrap_or(0.0),
        attribute(attributes, "cy")?.unwrap_or(0.0),
    );
    Ok(Path::new(vec![Segment::Arc {
        center,
        radii: Vector2::new(rx, ry),
        x_rotation: 0.0,
        start_angle: 0.0,
        sweep_angle: TAU,
    }]))
}

fn polyline_path(points: &[Point2<Real>], close: bool) -> Option<Path> {
    if points.len() < 2 {
        return None;
    }
    let mut segments: Vec<Segment> = points
        .windows(2)
        .map(|pair| Segment::Line {
            start: pair[0],
            end: pair[1],
        })
        .collect();
    if close {
        segments.push(Segment::Line {
            start: points[points.len() - 1],
            end: points[0],
        });
    }
    Some(Path::new(segments))
}

fn attribute(attributes: &Attributes, name: &str) -> Result<Option<Real>, LoadError> {
    match attributes.get(name) {
        Some(value) => Ok(Some(value.trim().parse::<Real>()?)),
        None => Ok(None),
    }
}
