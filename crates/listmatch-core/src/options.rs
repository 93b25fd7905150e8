//! Tuning knobs for a matching run.
//!
//! None of these change which listings are retained; they only affect how the
//! work is scheduled and how often progress is reported.

/// Options for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Report progress every this many thousandths of the listings (default: 1).
    pub progress_permille: usize,
    /// Classify listings on a rayon worker pool.
    pub parallel: bool,
    /// Worker count for parallel runs; `None` uses the global pool.
    pub jobs: Option<usize>,
    /// Listings per work unit in parallel runs (default: 256).
    pub chunk_size: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            progress_permille: 1,
            parallel: false,
            jobs: None,
            chunk_size: 256,
        }
    }
}

impl MatchOptions {
    /// Set the progress cadence in thousandths of the input.
    #[must_use]
    pub fn with_progress_permille(mut self, permille: usize) -> Self {
        self.progress_permille = permille;
        self
    }

    /// Enable parallel classification, optionally with a fixed worker count.
    #[must_use]
    pub fn with_parallel(mut self, jobs: Option<usize>) -> Self {
        self.parallel = true;
        self.jobs = jobs;
        self
    }

    /// Set the parallel work-unit size. Zero is treated as one.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Number of listings between progress reports for an input of `total`.
    pub fn progress_interval(&self, total: usize) -> usize {
        (total * self.progress_permille / 1000).max(1)
    }
}
