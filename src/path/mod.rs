//! Parametric 2D paths: the curve segments an SVG outline is made of,
//! with a position function over a global parameter `t` in `[0, 1]`.

pub mod data;
pub mod points;

use crate::float_types::{EPSILON, Real, TAU};
use nalgebra::{Point2, Rotation2, Vector2};

/// One parametric curve segment.
///
/// Arcs are stored in center parameterization (converted from the SVG
/// endpoint form on construction) so evaluation is a single trig call.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line {
        start: Point2<Real>,
        end: Point2<Real>,
    },
    Quadratic {
        start: Point2<Real>,
        control: Point2<Real>,
        end: Point2<Real>,
    },
    Cubic {
        start: Point2<Real>,
        control1: Point2<Real>,
        control2: Point2<Real>,
        end: Point2<Real>,
    },
    Arc {
        center: Point2<Real>,
        radii: Vector2<Real>,
        /// Rotation of the ellipse's X axis, in radians.
        x_rotation: Real,
        start_angle: Real,
        /// Signed sweep; positive turns counter-clockwise.
        sweep_angle: Real,
    },
}

impl Segment {
    /// Evaluate the segment at local parameter `u` in `[0, 1]`.
    pub fn position(&self, u: Real) -> Point2<Real> {
        match self {
            Segment::Line { start, end } => Point2::from(start.coords.lerp(&end.coords, u)),
            Segment::Quadratic {
                start,
                control,
                end,
            } => {
                let v = 1.0 - u;
                Point2::from(
                    start.coords * (v * v)
                        + control.coords * (2.0 * v * u)
                        + end.coords * (u * u),
                )
            },
            Segment::Cubic {
                start,
                control1,
                control2,
                end,
            } => {
                let v = 1.0 - u;
                Point2::from(
                    start.coords * (v * v * v)
                        + control1.coords * (3.0 * v * v * u)
                        + control2.coords * (3.0 * v * u * u)
                        + end.coords * (u * u * u),
                )
            },
            Segment::Arc {
                center,
                radii,
                x_rotation,
                start_angle,
                sweep_angle,
            } => {
                let theta = start_angle + u * sweep_angle;
                let local = Vector2::new(radii.x * theta.cos(), radii.y * theta.sin());
                center + Rotation2::new(*x_rotation) * local
            },
        }
    }

    pub fn start(&self) -> Point2<Real> {
        self.position(0.0)
    }

    pub fn end(&self) -> Point2<Real> {
        self.position(1.0)
    }

    /// Build an arc from the SVG endpoint parameterization
    /// (conversion per SVG 1.1 appendix F.6.5).
    ///
    /// Degenerate radii collapse to a line segment, as the SVG spec
    /// prescribes. Radii too small to span the endpoints are scaled up
    /// uniformly until they fit.
    pub fn arc_from_endpoints(
        start: Point2<Real>,
        mut rx: Real,
        mut ry: Real,
        x_rotation_deg: Real,
        large_arc: bool,
        sweep: bool,
        end: Point2<Real>,
    ) -> Segment {
        rx = rx.abs();
        ry = ry.abs();
        if rx < EPSILON || ry < EPSILON {
            return Segment::Line { start, end };
        }

        let phi = x_rotation_deg.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let dx = (start.x - end.x) / 2.0;
        let dy = (start.y - end.y) / 2.0;
        let x1p = cos_phi * dx + sin_phi * dy;
        let y1p = -sin_phi * dx + cos_phi * dy;

        // Scale radii up until the endpoints are reachable (F.6.6.2).
        let lambda = (x1p / rx).powi(2) + (y1p / ry).powi(2);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let numerator = rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p;
        let denominator = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
        // Coincident endpoints draw nothing.
        if denominator < EPSILON {
            return Segment::Line { start, end };
        }
        let mut coefficient = (numerator / denominator).max(0.0).sqrt();
        if large_arc == sweep {
            coefficient = -coefficient;
        }
        let cxp = coefficient * rx * y1p / ry;
        let cyp = -coefficient * ry * x1p / rx;
        let center = Point2::new(
            cos_phi * cxp - sin_phi * cyp + (start.x + end.x) / 2.0,
            sin_phi * cxp + cos_phi * cyp + (start.y + end.y) / 2.0,
        );

        let start_angle = ((y1p - cyp) / ry).atan2((x1p - cxp) / rx);
        let end_angle = ((-y1p - cyp) / ry).atan2((-x1p - cxp) / rx);
        let mut sweep_angle = end_angle - start_angle;
        if sweep && sweep_angle < 0.0 {
            sweep_angle += TAU;
        }
        if !sweep && sweep_angle > 0.0 {
            sweep_angle -= TAU;
        }

        Segment::Arc {
            center,
            radii: Vector2::new(rx, ry),
            x_rotation: phi,
            start_angle,
            sweep_angle,
        }
    }
}

/// An ordered sequence of segments; immutable once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub const fn new(segments: Vec<Segment>) -> Self {
        Path { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Evaluate the path's position function at global parameter `t` in
    /// `[0, 1]`. Each segment is allotted an equal parameter share,
    /// regardless of its arc length.
    pub fn position(&self, t: Real) -> Point2<Real> {
        let count = self.segments.len();
        if count == 0 {
            return Point2::origin();
        }
        let scaled = t.clamp(0.0, 1.0) * count as Real;
        let index = (scaled as usize).min(count - 1);
        self.segments[index].position(scaled - index as Real)
    }

    /// Take `count` samples at uniformly spaced parameter values from 0 to 1
    /// inclusive.
    pub fn sample(&self, count: usize) -> Vec<Point2<Real>> {
        if self.segments.is_empty() || count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![self.position(0.0)];
        }
        (0..count)
            .map(|i| self.position(i as Real / (count - 1) as Real))
            .collect()
    }
}
