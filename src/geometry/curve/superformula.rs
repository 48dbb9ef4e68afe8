use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::PathData;
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::operations::query::{Aabb2, ArcLengthTable, BoundingBox, MaxRadius};
use crate::operations::{ApproximatePath, SamplingParams};
use crate::render::{self, DocumentParams};

use super::{Curve2d, CurveDomain};

/// Default step of the central-difference tangent estimate.
pub const DEFAULT_TANGENT_STEP: f64 = 1e-9;

/// Shape parameters of a superformula curve.
///
/// `r(phi) = scale * (|cos(m*phi/4) / a|^n2 + |sin(m*phi/4) / b|^n3)^(-1/n1)`
///
/// No validation is performed: `a == 0`, `b == 0`, `n1 == 0` and similar
/// combinations evaluate to non-finite radii rather than failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperformulaParams {
    /// Scale of the cosine term's denominator.
    pub a: f64,
    /// Scale of the sine term's denominator.
    pub b: f64,
    /// Angular frequency (symmetry order).
    pub m: f64,
    /// Outer exponent.
    pub n1: f64,
    /// Cosine term exponent.
    pub n2: f64,
    /// Sine term exponent.
    pub n3: f64,
    /// Overall radius multiplier.
    pub scale: f64,
}

impl SuperformulaParams {
    /// Creates a parameter set with `scale = 1`.
    #[must_use]
    pub fn new(a: f64, b: f64, m: f64, n1: f64, n2: f64, n3: f64) -> Self {
        Self {
            a,
            b,
            m,
            n1,
            n2,
            n3,
            scale: 1.0,
        }
    }

    /// Returns the angular interval over which the shape repeats.
    ///
    /// `2π` when the two shape exponents match, `4π` otherwise.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn natural_period(&self) -> f64 {
        if self.n2 == self.n3 {
            TAU
        } else {
            2.0 * TAU
        }
    }

    /// Evaluates the superformula radius at `angle`.
    #[must_use]
    pub fn radius(&self, angle: f64) -> f64 {
        let phase = self.m * angle / 4.0;
        let cos_term = (phase.cos() / self.a).abs().powf(self.n2);
        let sin_term = (phase.sin() / self.b).abs().powf(self.n3);
        self.scale * (cos_term + sin_term).powf(-1.0 / self.n1)
    }

    /// Returns the Cartesian point at `angle`.
    #[must_use]
    pub fn point(&self, angle: f64) -> Point2 {
        let r = self.radius(angle);
        Point2::new(r * angle.cos(), r * angle.sin())
    }

    /// Estimates the derivative of [`point`](Self::point) by central
    /// difference with step `h`.
    #[must_use]
    pub fn tangent_with_step(&self, angle: f64, h: f64) -> Vector2 {
        (self.point(angle + h) - self.point(angle - h)) / (2.0 * h)
    }
}

impl Curve2d for SuperformulaParams {
    fn evaluate(&self, t: f64) -> Point2 {
        self.point(t)
    }

    fn tangent(&self, t: f64) -> Vector2 {
        self.tangent_with_step(t, DEFAULT_TANGENT_STEP)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.natural_period())
    }

    fn is_closed(&self) -> bool {
        let start = self.point(0.0);
        let end = self.point(self.natural_period());
        (end - start).norm() < TOLERANCE
    }
}

/// A superformula curve with a lazily built arclength table.
///
/// The shape parameters are fixed at construction. Arclength queries
/// ([`point_at_length`](Self::point_at_length)) build the table on first use
/// and keep a forward-scanning cursor, which is why they take `&mut self`.
#[derive(Debug, Clone)]
pub struct Superformula {
    params: SuperformulaParams,
    length_table: Option<ArcLengthTable>,
}

impl Superformula {
    /// Creates a new curve with `scale = 1`.
    #[must_use]
    pub fn new(a: f64, b: f64, m: f64, n1: f64, n2: f64, n3: f64) -> Self {
        Self::from_params(SuperformulaParams::new(a, b, m, n1, n2, n3))
    }

    /// Creates a new curve from a parameter set.
    #[must_use]
    pub fn from_params(params: SuperformulaParams) -> Self {
        Self {
            params,
            length_table: None,
        }
    }

    /// Returns the curve with its overall radius multiplier replaced.
    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self::from_params(SuperformulaParams {
            scale,
            ..self.params
        })
    }

    /// Returns the shape parameters.
    #[must_use]
    pub fn params(&self) -> &SuperformulaParams {
        &self.params
    }

    /// Returns the angular interval over which the shape repeats.
    #[must_use]
    pub fn natural_period(&self) -> f64 {
        self.params.natural_period()
    }

    /// Evaluates the radius at `angle`.
    #[must_use]
    pub fn radius(&self, angle: f64) -> f64 {
        self.params.radius(angle)
    }

    /// Returns the Cartesian point at `angle`.
    #[must_use]
    pub fn point(&self, angle: f64) -> Point2 {
        self.params.point(angle)
    }

    /// Estimates the tangent at `angle` with the default step.
    #[must_use]
    pub fn tangent(&self, angle: f64) -> Vector2 {
        self.params.tangent(angle)
    }

    /// Estimates the tangent at `angle` with a caller-chosen step.
    #[must_use]
    pub fn tangent_with_step(&self, angle: f64, h: f64) -> Vector2 {
        self.params.tangent_with_step(angle, h)
    }

    /// Approximates one natural period with `segments` smooth cubic segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn path_approximation(&self, segments: usize) -> Result<PathData> {
        ApproximatePath::new(segments).execute(self)
    }

    /// Origin-inclusive bounding box over `samples` points of one period.
    #[must_use]
    pub fn bounding_box(&self, samples: usize) -> Aabb2 {
        BoundingBox::new(samples).execute(self)
    }

    /// Largest radius observed over `samples` angles, never below zero.
    #[must_use]
    pub fn max_radius(&self, samples: usize) -> f64 {
        MaxRadius::new(samples).execute(&self.params)
    }

    /// Builds (or rebuilds) the arclength table with `samples` chords.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is zero.
    pub fn build_length_table(&mut self, samples: usize) -> Result<()> {
        let table = ArcLengthTable::build(&*self, samples)?;
        self.length_table = Some(table);
        Ok(())
    }

    /// Returns the arclength table, if it has been built.
    #[must_use]
    pub fn length_table(&self) -> Option<&ArcLengthTable> {
        self.length_table.as_ref()
    }

    /// Returns the point at `length`, a fraction in `[0, 1]` of the total
    /// curve length over one natural period.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is outside `[0, 1]` or NaN.
    pub fn point_at_length(&mut self, length: f64) -> Result<Point2> {
        let table = match self.length_table.take() {
            Some(table) => table,
            None => {
                let samples = SamplingParams::default().length_samples;
                ArcLengthTable::build(&*self, samples)?
            }
        };
        let angle = self.length_table.insert(table).angle_at(length)?;
        Ok(self.point(angle))
    }

    /// Renders the curve as a standalone SVG document.
    ///
    /// `attributes` is appended verbatim to the `<path>` element.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn to_svg(&self, segments: usize, attributes: Option<&str>) -> Result<String> {
        let sampling = SamplingParams {
            segments,
            ..SamplingParams::default()
        };
        render::render_curve_svg(
            self,
            &sampling,
            &DocumentParams::default(),
            attributes,
        )
    }

    /// Renders the curve as an `image/svg+xml` base64 data URI.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero.
    pub fn to_svg_data_uri(&self, segments: usize, attributes: Option<&str>) -> Result<String> {
        let svg = self.to_svg(segments, attributes)?;
        Ok(render::to_data_uri(&svg, Some(render::SVG_CONTENT_TYPE)))
    }
}

impl Curve2d for Superformula {
    fn evaluate(&self, t: f64) -> Point2 {
        self.params.evaluate(t)
    }

    fn tangent(&self, t: f64) -> Vector2 {
        self.params.tangent(t)
    }

    fn domain(&self) -> CurveDomain {
        self.params.domain()
    }

    fn is_closed(&self) -> bool {
        self.params.is_closed()
    }
}
