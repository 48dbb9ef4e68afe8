use crate::geometry::Curve2d;
use crate::math::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Creates the degenerate box containing only the origin.
    #[must_use]
    pub fn origin() -> Self {
        Self {
            min: Point2::origin(),
            max: Point2::origin(),
        }
    }

    /// Grows the box to contain `p`.
    ///
    /// Non-finite coordinates never compare as smaller or larger, so they
    /// leave the box unchanged.
    pub fn include(&mut self, p: &Point2) {
        if p.x < self.min.x {
            self.min.x = p.x;
        }
        if p.x > self.max.x {
            self.max.x = p.x;
        }
        if p.y < self.min.y {
            self.min.y = p.y;
        }
        if p.y > self.max.y {
            self.max.y = p.y;
        }
    }

    /// Returns the extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns whether `p` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Computes a coarse bounding box of one curve period.
///
/// Samples `samples` parameters (the closing sample is skipped since it
/// repeats the first one). The box is seeded at the origin and therefore
/// always contains it.
pub struct BoundingBox {
    samples: usize,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Executes the query, returning the box.
    #[must_use]
    pub fn execute<C: Curve2d + ?Sized>(&self, curve: &C) -> Aabb2 {
        let domain = curve.domain();
        let mut bounds = Aabb2::origin();
        for i in 0..self.samples {
            bounds.include(&curve.evaluate(domain.sample(i, self.samples)));
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SuperformulaParams;
    use approx::assert_abs_diff_eq;

    #[test]
    fn flower_four_samples_hits_the_axes() {
        let flower = SuperformulaParams::new(1.0, 1.0, 4.0, 2.0, 10.0, 10.0);
        let bb = BoundingBox::new(4).execute(&flower);
        assert_abs_diff_eq!(bb.min.x, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.min.y, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.max.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bb.max.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn always_contains_origin() {
        let shapes = [
            SuperformulaParams::new(1.0, 1.0, 3.0, 4.5, 10.0, 10.0),
            SuperformulaParams::new(2.0, 0.5, 7.0, 0.3, 1.2, 6.0),
            SuperformulaParams {
                scale: -2.0,
                ..SuperformulaParams::new(1.0, 1.0, 1.0, 1.0, 1.0, 1.0)
            },
        ];
        for c in &shapes {
            let bb = BoundingBox::new(32).execute(c);
            assert!(bb.contains(&Point2::origin()));
        }
    }

    #[test]
    fn zero_samples_is_the_origin() {
        let c = SuperformulaParams::new(1.0, 1.0, 4.0, 2.0, 10.0, 10.0);
        assert_eq!(BoundingBox::new(0).execute(&c), Aabb2::origin());
    }

    #[test]
    fn include_grows_box() {
        let mut bb = Aabb2::origin();
        bb.include(&Point2::new(2.0, -1.0));
        bb.include(&Point2::new(-0.5, 3.0));
        assert_abs_diff_eq!(bb.width(), 2.5);
        assert_abs_diff_eq!(bb.height(), 4.0);
        assert!(bb.contains(&Point2::new(1.0, 1.0)));
        assert!(!bb.contains(&Point2::new(3.0, 1.0)));
    }

    #[test]
    fn nan_points_are_ignored() {
        let mut bb = Aabb2::origin();
        bb.include(&Point2::new(f64::NAN, 1.0));
        assert_abs_diff_eq!(bb.width(), 0.0);
        assert_abs_diff_eq!(bb.height(), 1.0);
    }
}
