//! Records produced by the matching stages.
//!
//! Listings are never mutated. Each stage emits its own record that refers
//! back to the listing by input position.

use serde::Serialize;

use crate::listing::Listing;

/// The only score a listing may reach to survive a stage.
pub const PERFECT_SCORE: f64 = 1.0;

/// Outcome of classifying one listing title against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Position of the listing in the input sequence.
    pub listing_index: usize,
    /// Best product, or `None` when no product scored above zero.
    pub product_name: Option<String>,
    /// Best combined score, in `[0, 1]`.
    pub score: f64,
}

impl MatchResult {
    /// True when the listing is assigned to a product with a perfect score.
    pub fn is_perfect(&self) -> bool {
        self.product_name.is_some() && self.score == PERFECT_SCORE
    }
}

/// Score of one secondary field checked during disqualification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    pub field: &'static str,
    pub score: f64,
}

/// A classified listing after its cluster has been cross-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMatch {
    pub listing_index: usize,
    pub product_name: String,
    /// One entry per disqualifier, in the order they ran.
    pub field_scores: Vec<FieldScore>,
}

impl ValidatedMatch {
    pub fn score_for(&self, field: &str) -> Option<f64> {
        self.field_scores
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.score)
    }

    pub fn manufacturer_score(&self) -> Option<f64> {
        self.score_for("manufacturer")
    }

    /// True when every checked field scored perfectly.
    pub fn is_retained(&self) -> bool {
        self.field_scores
            .iter()
            .all(|entry| entry.score == PERFECT_SCORE)
    }
}

/// Final output record: a product and the listings resolved to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGroup {
    pub product_name: String,
    pub listings: Vec<Listing>,
}
