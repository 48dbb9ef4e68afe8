use tracing::{debug, trace, warn};

use crate::error::{GeometryError, Result};
use crate::geometry::Curve2d;

/// Cumulative chord-length table for arclength parameterization.
///
/// Entry `i` holds the polyline length from the domain start to sample `i`,
/// divided by the total so that the last entry is exactly `1.0`. A curve
/// with zero total length keeps its raw all-zero table.
///
/// Lookups keep a cursor (last queried length and the index found for it)
/// so that monotonically increasing queries scan forward from where the
/// previous one stopped. A smaller query rewinds the cursor to the start.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    cumulative: Vec<f64>,
    total_length: f64,
    t_min: f64,
    step: f64,
    last_length: f64,
    last_index: usize,
}

impl ArcLengthTable {
    /// Builds the table from `samples + 1` equally spaced points over the
    /// curve domain.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples` is zero.
    pub fn build<C: Curve2d + ?Sized>(curve: &C, samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(GeometryError::InvalidArgument(
                "arclength table needs at least one sample".into(),
            )
            .into());
        }

        let domain = curve.domain();
        let mut cumulative = Vec::with_capacity(samples + 1);
        cumulative.push(0.0);

        let mut total = 0.0;
        let mut prev = curve.evaluate(domain.t_min);
        for i in 1..=samples {
            let p = curve.evaluate(domain.sample(i, samples));
            total += (p - prev).norm();
            cumulative.push(total);
            prev = p;
        }

        if total > 0.0 {
            for length in &mut cumulative[1..] {
                *length /= total;
            }
        } else {
            warn!(samples, total, "degenerate arclength table, skipping normalization");
        }
        debug!(samples, total, "built arclength table");

        #[allow(clippy::cast_precision_loss)]
        let step = domain.span() / samples as f64;
        Ok(Self {
            cumulative,
            total_length: total,
            t_min: domain.t_min,
            step,
            last_length: 0.0,
            last_index: 0,
        })
    }

    /// Returns the cumulative lengths, `sample_count() + 1` entries.
    #[must_use]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Returns the number of chords in the table.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.cumulative.len() - 1
    }

    /// Returns the un-normalized polyline length.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Maps a normalized length in `[0, 1]` to a curve parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` is outside `[0, 1]` or NaN.
    pub fn angle_at(&mut self, length: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&length) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "length",
                value: length,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        if length < self.last_length {
            trace!(from = self.last_length, to = length, "rewinding arclength cursor");
            self.last_index = 0;
        }
        self.last_length = length;

        let last = self.cumulative.len() - 1;
        while self.last_index < last && self.cumulative[self.last_index] < length {
            self.last_index += 1;
        }

        // cumulative[index - 1] < length <= cumulative[index]
        let index = self.last_index;
        let position = if index == 0 {
            0.0
        } else {
            let lo = self.cumulative[index - 1];
            let span = self.cumulative[index] - lo;
            let fraction = if span > 0.0 { (length - lo) / span } else { 0.0 };
            #[allow(clippy::cast_precision_loss)]
            let base = (index - 1) as f64;
            base + fraction
        };

        Ok(self.t_min + self.step * position)
    }
}
