mod approximate_path;
pub mod query;

pub use approximate_path::ApproximatePath;

/// Sample counts used by the convenience entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Number of cubic segments in a path approximation.
    pub segments: usize,
    /// Number of samples for bounding-box and max-radius scans.
    pub bounds_samples: usize,
    /// Number of chords in an arclength table.
    pub length_samples: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            segments: 32,
            bounds_samples: 32,
            length_samples: 512,
        }
    }
}
