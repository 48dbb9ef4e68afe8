use crate::error::{GeometryError, Result};
use crate::geometry::{Curve2d, PathCommand, PathData};
use crate::math::{Point2, Vector2};

/// Control arm length as a fraction of the parameter step, applied to the
/// curve derivative. Chosen empirically.
const CONTROL_FACTOR: f64 = 0.4;

/// Approximates one period of a curve with smooth cubic Bezier segments.
///
/// Samples `segments + 1` equally spaced parameters over the curve domain.
/// Each sample contributes a control arm `CONTROL_FACTOR * step * tangent`;
/// the first segment is a full cubic (`c`), the rest are smooth cubics (`s`)
/// that mirror the previous arm, so the path is tangent-continuous.
pub struct ApproximatePath {
    segments: usize,
}

impl ApproximatePath {
    /// Creates a new `ApproximatePath` operation.
    #[must_use]
    pub fn new(segments: usize) -> Self {
        Self { segments }
    }

    /// Executes the approximation.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment count is zero.
    pub fn execute<C: Curve2d + ?Sized>(&self, curve: &C) -> Result<PathData> {
        if self.segments == 0 {
            return Err(GeometryError::InvalidArgument(
                "path approximation needs at least one segment".into(),
            )
            .into());
        }

        let domain = curve.domain();
        #[allow(clippy::cast_precision_loss)]
        let arm_scale = CONTROL_FACTOR * domain.span() / self.segments as f64;

        let mut commands = Vec::with_capacity(self.segments + 1);
        let mut prev: Option<(Point2, Vector2)> = None;

        for i in 0..=self.segments {
            let t = domain.sample(i, self.segments);
            let p = curve.evaluate(t);
            let arm = curve.tangent(t) * arm_scale;

            let cmd = match prev {
                None => PathCommand::MoveTo(p),
                Some((prev_p, prev_arm)) if i == 1 => PathCommand::CubicRel {
                    ctrl1: prev_arm,
                    ctrl2: p - arm - prev_p,
                    to: p - prev_p,
                },
                Some((prev_p, _)) => PathCommand::SmoothCubicRel {
                    ctrl2: p - arm - prev_p,
                    to: p - prev_p,
                },
            };
            commands.push(cmd);
            prev = Some((p, arm));
        }

        Ok(PathData::new(commands))
    }
}
