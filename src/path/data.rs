//! Build [`Path`]s out of parsed SVG path-data (`d` attribute) commands.

use crate::errors::LoadError;
use crate::float_types::{EPSILON, Real};
use crate::path::{Path, Segment};
use nalgebra::{Point2, Vector2};
use svg::node::element::path::{Command, Data, Position};

/// Resolve a command stream into absolute segments.
///
/// Sub-paths started by repeated move commands are kept in one `Path`;
/// the sampler flattens every path element into a single outline anyway.
pub fn path_from_data(data: &Data) -> Result<Path, LoadError> {
    let mut builder = PathBuilder::default();

    for command in data.iter() {
        match command {
            Command::Move(position, parameters) => {
                builder.move_to(relative(position), &to_reals(parameters))?
            },
            Command::Line(position, parameters) => {
                builder.line_to(relative(position), &to_reals(parameters))?
            },
            Command::HorizontalLine(position, parameters) => {
                builder.horizontal_to(relative(position), &to_reals(parameters))?
            },
            Command::VerticalLine(position, parameters) => {
                builder.vertical_to(relative(position), &to_reals(parameters))?
            },
            Command::CubicCurve(position, parameters) => {
                builder.cubic_to(relative(position), &to_reals(parameters))?
            },
            Command::SmoothCubicCurve(position, parameters) => {
                builder.smooth_cubic_to(relative(position), &to_reals(parameters))?
            },
            Command::QuadraticCurve(position, parameters) => {
                builder.quadratic_to(relative(position), &to_reals(parameters))?
            },
            Command::SmoothQuadraticCurve(position, parameters) => {
                builder.smooth_quadratic_to(relative(position), &to_reals(parameters))?
            },
            Command::EllipticalArc(position, parameters) => {
                builder.arc_to(relative(position), &to_reals(parameters))?
            },
            Command::Close => builder.close(),
        }
    }

    Ok(builder.finish())
}

fn relative(position: &Position) -> bool {
    matches!(position, Position::Relative)
}

#[allow(clippy::unnecessary_cast)]
fn to_reals(parameters: &[svg::node::element::path::Number]) -> Vec<Real> {
    parameters.iter().map(|value| *value as Real).collect()
}

#[derive(Default)]
struct PathBuilder {
    segments: Vec<Segment>,
    current: Option<Point2<Real>>,
    subpath_start: Point2<Real>,
    /// Second control point of the last cubic, for `S`/`s` reflection.
    last_cubic_control: Option<Point2<Real>>,
    /// Control point of the last quadratic, for `T`/`t` reflection.
    last_quadratic_control: Option<Point2<Real>>,
}

impl PathBuilder {
    fn malformed(command: &str, parameters: &[Real]) -> LoadError {
        LoadError::MalformedPath(format!(
            "`{command}` command with {} parameters",
            parameters.len()
        ))
    }

    fn current(&self, command: &str) -> Result<Point2<Real>, LoadError> {
        self.current.ok_or_else(|| {
            LoadError::MalformedPath(format!("`{command}` command before any move"))
        })
    }

    fn resolve(&self, relative: bool, x: Real, y: Real) -> Point2<Real> {
        match (relative, self.current) {
            (true, Some(current)) => current + Vector2::new(x, y),
            _ => Point2::new(x, y),
        }
    }

    fn forget_controls(&mut self) {
        self.last_cubic_control = None;
        self.last_quadratic_control = None;
    }

    fn push_line(&mut self, end: Point2<Real>) {
        // A `move` with no current point yet contributes no segment.
        if let Some(start) = self.current {
            self.segments.push(Segment::Line { start, end });
        }
        self.current = Some(end);
    }

    fn move_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.len() < 2 || parameters.len() % 2 != 0 {
            return Err(Self::malformed("move", parameters));
        }
        let mut pairs = parameters.chunks_exact(2);
        let first = pairs.next().ok_or_else(|| Self::malformed("move", parameters))?;
        let target = self.resolve(relative, first[0], first[1]);
        self.current = Some(target);
        self.subpath_start = target;
        // Extra coordinate pairs are implicit line-tos.
        for pair in pairs {
            let target = self.resolve(relative, pair[0], pair[1]);
            self.push_line(target);
        }
        self.forget_controls();
        Ok(())
    }

    fn line_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() || parameters.len() % 2 != 0 {
            return Err(Self::malformed("line", parameters));
        }
        self.current("line")?;
        for pair in parameters.chunks_exact(2) {
            let target = self.resolve(relative, pair[0], pair[1]);
            self.push_line(target);
        }
        self.forget_controls();
        Ok(())
    }

    fn horizontal_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() {
            return Err(Self::malformed("horizontal line", parameters));
        }
        for &x in parameters {
            let current = self.current("horizontal line")?;
            let target = if relative {
                Point2::new(current.x + x, current.y)
            } else {
                Point2::new(x, current.y)
            };
            self.push_line(target);
        }
        self.forget_controls();
        Ok(())
    }

    fn vertical_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() {
            return Err(Self::malformed("vertical line", parameters));
        }
        for &y in parameters {
            let current = self.current("vertical line")?;
            let target = if relative {
                Point2::new(current.x, current.y + y)
            } else {
                Point2::new(current.x, y)
            };
            self.push_line(target);
        }
        self.forget_controls();
        Ok(())
    }

    fn cubic_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() || parameters.len() % 6 != 0 {
            return Err(Self::malformed("cubic curve", parameters));
        }
        for group in parameters.chunks_exact(6) {
            let start = self.current("cubic curve")?;
            let control1 = self.resolve(relative, group[0], group[1]);
            let control2 = self.resolve(relative, group[2], group[3]);
            let end = self.resolve(relative, group[4], group[5]);
            self.segments.push(Segment::Cubic {
                start,
                control1,
                control2,
                end,
            });
            self.current = Some(end);
            self.last_cubic_control = Some(control2);
        }
        self.last_quadratic_control = None;
        Ok(())
    }

    fn smooth_cubic_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() || parameters.len() % 4 != 0 {
            return Err(Self::malformed("smooth cubic curve", parameters));
        }
        for group in parameters.chunks_exact(4) {
            let start = self.current("smooth cubic curve")?;
            let control1 = match self.last_cubic_control {
                Some(control) => reflect(control, start),
                None => start,
            };
            let control2 = self.resolve(relative, group[0], group[1]);
            let end = self.resolve(relative, group[2], group[3]);
            self.segments.push(Segment::Cubic {
                start,
                control1,
                control2,
                end,
            });
            self.current = Some(end);
            self.last_cubic_control = Some(control2);
        }
        self.last_quadratic_control = None;
        Ok(())
    }

    fn quadratic_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() || parameters.len() % 4 != 0 {
            return Err(Self::malformed("quadratic curve", parameters));
        }
        for group in parameters.chunks_exact(4) {
            let start = self.current("quadratic curve")?;
            let control = self.resolve(relative, group[0], group[1]);
            let end = self.resolve(relative, group[2], group[3]);
            self.segments.push(Segment::Quadratic {
                start,
                control,
                end,
            });
            self.current = Some(end);
            self.last_quadratic_control = Some(control);
        }
        self.last_cubic_control = None;
        Ok(())
    }

    fn smooth_quadratic_to(
        &mut self,
        relative: bool,
        parameters: &[Real],
    ) -> Result<(), LoadError> {
        if parameters.is_empty() || parameters.len() % 2 != 0 {
            return Err(Self::malformed("smooth quadratic curve", parameters));
        }
        for pair in parameters.chunks_exact(2) {
            let start = self.current("smooth quadratic curve")?;
            let control = match self.last_quadratic_control {
                Some(control) => reflect(control, start),
                None => start,
            };
            let end = self.resolve(relative, pair[0], pair[1]);
            self.segments.push(Segment::Quadratic {
                start,
                control,
                end,
            });
            self.current = Some(end);
            self.last_quadratic_control = Some(control);
        }
        self.last_cubic_control = None;
        Ok(())
    }

    fn arc_to(&mut self, relative: bool, parameters: &[Real]) -> Result<(), LoadError> {
        if parameters.is_empty() || parameters.len() % 7 != 0 {
            return Err(Self::malformed("elliptical arc", parameters));
        }
        for group in parameters.chunks_exact(7) {
            let start = self.current("elliptical arc")?;
            let end = self.resolve(relative, group[5], group[6]);
            // Coincident endpoints render nothing (SVG F.6.2).
            if (end - start).norm() < EPSILON {
                continue;
            }
            self.segments.push(Segment::arc_from_endpoints(
                start,
                group[0],
                group[1],
                group[2],
                group[3] != 0.0,
                group[4] != 0.0,
                end,
            ));
            self.current = Some(end);
        }
        self.forget_controls();
        Ok(())
    }

    fn close(&mut self) {
        if let Some(current) = self.current
            && (current - self.subpath_start).norm() > EPSILON
        {
            self.segments.push(Segment::Line {
                start: current,
                end: self.subpath_start,
            });
        }
        self.current = Some(self.subpath_start);
        self.forget_controls();
    }

    fn finish(self) -> Path {
        Path::new(self.segments)
    }
}

fn reflect(control: Point2<Real>, about: Point2<Real>) -> Point2<Real> {
    about + (about - control)
}
