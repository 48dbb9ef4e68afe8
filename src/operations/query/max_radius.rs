use crate::geometry::{Curve2d, SuperformulaParams};

/// Computes the largest superformula radius over one period.
///
/// Samples `samples` angles; the result is seeded at zero, so it is never
/// negative.
pub struct MaxRadius {
    samples: usize,
}

impl MaxRadius {
    /// Creates a new `MaxRadius` query.
    #[must_use]
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Executes the query, returning the maximum radius.
    #[must_use]
    pub fn execute(&self, curve: &SuperformulaParams) -> f64 {
        let domain = curve.domain();
        (0..self.samples)
            .map(|i| curve.radius(domain.sample(i, self.samples)))
            .fold(0.0, |max, r| if r > max { r } else { max })
    }
}
