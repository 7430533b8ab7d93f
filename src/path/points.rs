//! Parser for the `points` attribute of `<polygon>` and `<polyline>`,
//! which the `svg` crate leaves as a raw string.

use crate::errors::LoadError;
use crate::float_types::Real;
use nalgebra::Point2;
use nom::IResult;
use nom::bytes::complete::take_while1;
use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{delimited, separated_pair};

fn separator(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_whitespace() || c == ',')(input)
}

#[allow(clippy::unnecessary_cast)]
fn coordinate_pair(input: &str) -> IResult<&str, Point2<Real>> {
    let (rest, (x, y)) = separated_pair(double, separator, double)(input)?;
    Ok((rest, Point2::new(x as Real, y as Real)))
}

/// Parse `x1,y1 x2,y2 …` (commas and whitespace both separate) into points.
/// Trailing garbage and odd coordinate counts are rejected.
pub fn parse_points(input: &str) -> Result<Vec<Point2<Real>>, LoadError> {
    let ring = delimited(
        multispace0,
        separated_list1(separator, coordinate_pair),
        multispace0,
    );
    match all_consuming(ring)(input) {
        Ok((_, points)) => Ok(points),
        Err(_) => Err(LoadError::MalformedPoints(input.trim().to_string())),
    }
}
