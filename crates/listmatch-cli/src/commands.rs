//! Command implementations.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use listmatch_core::{MatchOptions, MatchPipeline, PipelineOutcome, Progress, ProgressSink};
use listmatch_ingest::{load_catalog, read_listings};
use listmatch_output::{write_jsonl, write_jsonl_file};
use tracing::info;

/// Inputs for one `match` run.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub products: PathBuf,
    pub listings: PathBuf,
    /// Results file; stdout when `None`.
    pub output: Option<PathBuf>,
    pub options: MatchOptions,
}

/// What a `match` run produced.
#[derive(Debug)]
pub struct MatchReport {
    pub outcome: PipelineOutcome,
    /// Number of product groups written.
    pub written: usize,
}

/// Progress sink that reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_progress(&self, progress: &Progress) {
        info!(
            processed = progress.processed,
            total = progress.total,
            "progress: {:.1}% done, {:.1}% matched, {:.1}% cache hits",
            progress.fraction_done() * 100.0,
            progress.matched_ratio() * 100.0,
            progress.cache_hit_ratio() * 100.0,
        );
    }
}

/// Load both inputs, run the pipeline and write the product groups.
pub fn run_match(request: &MatchRequest) -> Result<MatchReport> {
    let catalog = load_catalog(&request.products)
        .with_context(|| format!("loading products from {}", request.products.display()))?;
    let listings = read_listings(&request.listings)
        .with_context(|| format!("loading listings from {}", request.listings.display()))?;

    let outcome = MatchPipeline::new(request.options.clone())
        .run(&catalog, &listings, &LogProgress)
        .context("matching listings")?;

    let written = match &request.output {
        Some(path) => write_jsonl_file(path, &outcome.groups)
            .with_context(|| format!("writing results to {}", path.display()))?,
        None => write_jsonl(io::stdout().lock(), &outcome.groups)
            .context("writing results to stdout")?,
    };

    let stats = &outcome.stats;
    info!(
        listings = stats.listings,
        classified = stats.classified,
        retained = stats.retained,
        products = stats.products_matched,
        cache_hits = stats.cache_hits,
        "matching complete"
    );
    Ok(MatchReport { outcome, written })
}
