//! Progress reporting hook for classification.

/// Snapshot of classification progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Listings classified so far.
    pub processed: usize,
    /// Listings in the run.
    pub total: usize,
    /// Processed listings whose best score was perfect.
    pub matched: usize,
    /// Processed listings answered from the match cache.
    pub cache_hits: usize,
}

impl Progress {
    pub fn fraction_done(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    pub fn matched_ratio(&self) -> f64 {
        ratio(self.matched, self.processed)
    }

    pub fn cache_hit_ratio(&self) -> f64 {
        ratio(self.cache_hits, self.processed)
    }

    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Receives progress snapshots. Purely observational.
pub trait ProgressSink {
    fn on_progress(&self, progress: &Progress);
}

impl<F> ProgressSink for F
where
    F: Fn(&Progress),
{
    fn on_progress(&self, progress: &Progress) {
        self(progress)
    }
}

/// Sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _progress: &Progress) {}
}

/// Counts listings and decides when a snapshot is due.
#[derive(Debug)]
pub(crate) struct ProgressTracker {
    interval: usize,
    current: Progress,
}

impl ProgressTracker {
    pub(crate) fn new(total: usize, interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            current: Progress {
                total,
                ..Progress::default()
            },
        }
    }

    /// Record one listing; returns a snapshot when one is due.
    ///
    /// The final listing never triggers a snapshot here, [`Self::finish`] does.
    pub(crate) fn record(&mut self, matched: bool, cache_hit: bool) -> Option<Progress> {
        self.current.processed += 1;
        if matched {
            self.current.matched += 1;
        }
        if cache_hit {
            self.current.cache_hits += 1;
        }
        let due = self.current.processed % self.interval == 0;
        (due && !self.current.is_complete()).then_some(self.current)
    }

    pub(crate) fn finish(&self) -> Progress {
        self.current
    }
}
