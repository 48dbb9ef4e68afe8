mod superformula;

pub use superformula::{Superformula, SuperformulaParams, DEFAULT_TANGENT_STEP};

use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Returns the parameter of sample `index` out of `count` equal steps.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn sample(&self, index: usize, count: usize) -> f64 {
        self.t_min + self.span() * index as f64 / count as f64
    }
}

/// Trait for parametric curves in the plane.
///
/// Evaluation is total: curves with degenerate parameters report non-finite
/// coordinates instead of failing.
pub trait Curve2d {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the (unnormalized) derivative of the curve at parameter `t`.
    fn tangent(&self, t: f64) -> Vector2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
