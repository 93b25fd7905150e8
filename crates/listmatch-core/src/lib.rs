//! Listing-to-product matching engine.
//!
//! Resolves noisy product listings against a canonical catalog, keeping a
//! listing only when both its title and its manufacturer match a product
//! perfectly. Precision is favored over recall: anything ambiguous is dropped.
//!
//! The pieces, leaf-first:
//!
//! - [`normalize`] - lowercase, Unicode-aware token and compact forms
//! - [`score`] - three similarity heuristics combined by maximum
//! - [`matcher`] - memoized best-match search with a deterministic tie-break
//! - [`disqualify`] - per-field cross-checks of classified listings
//! - [`pipeline`] - the staged run that ties them together

#![deny(unsafe_code)]

pub mod disqualify;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod progress;
pub mod score;

use listmatch_model::{Catalog, Listing, MatchResult, ValidatedMatch};

pub use disqualify::{ClusterValidator, Disqualifier, ManufacturerDisqualifier};
pub use error::{MatchError, Result};
pub use matcher::{BestMatch, Candidate, MatchCache, Matcher, compare_candidates};
pub use normalize::{PreparedText, normalize, normalize_compact};
pub use options::MatchOptions;
pub use pipeline::{MatchPipeline, PipelineOutcome, RunStats, group_by_product};
pub use progress::{NoProgress, Progress, ProgressSink};
pub use score::{
    Heuristic, adjacent_glue_score, combined_score, exact_subsequence_score, token_overlap_score,
};

/// Stage 1 with default options: one result per listing, in input order.
pub fn classify(catalog: &Catalog, listings: &[Listing]) -> Result<Vec<MatchResult>> {
    let mut matcher = Matcher::new(catalog)?;
    Ok(matcher.classify(listings, &NoProgress))
}

/// Stage 2 with the default manufacturer check.
pub fn disqualify(
    catalog: &Catalog,
    listings: &[Listing],
    classified: &[MatchResult],
) -> Vec<ValidatedMatch> {
    ClusterValidator::default().disqualify(catalog, listings, classified)
}
