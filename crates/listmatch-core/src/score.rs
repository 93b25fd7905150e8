//! Similarity heuristics between a listing field and a catalog field.
//!
//! Every heuristic takes `(query, reference)`: the query is the noisy listing
//! text, the reference is the authoritative catalog text and is always the
//! denominator. Scores lie in `[0, 1]` and a missing argument scores `0.0`.

use std::collections::BTreeSet;

use crate::normalize::PreparedText;

/// The individual heuristics, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Compact reference appears verbatim inside the compact query.
    ExactSubsequence,
    /// Share of reference tokens present in the query.
    TokenOverlap,
    /// Token overlap after gluing one adjacent pair of query tokens.
    AdjacentGlue,
}

impl Heuristic {
    /// All heuristics in evaluation order.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::ExactSubsequence,
        Heuristic::TokenOverlap,
        Heuristic::AdjacentGlue,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ExactSubsequence => "exact subsequence",
            Self::TokenOverlap => "token overlap",
            Self::AdjacentGlue => "adjacent glue",
        }
    }

    pub fn score_prepared(&self, query: &PreparedText, reference: &PreparedText) -> f64 {
        match self {
            Self::ExactSubsequence => exact_subsequence_prepared(query, reference),
            Self::TokenOverlap => overlap_ratio(query.token_set(), reference.token_set()),
            Self::AdjacentGlue => adjacent_glue_prepared(query, reference),
        }
    }

    pub fn score(&self, query: Option<&str>, reference: Option<&str>) -> f64 {
        match (query, reference) {
            (Some(query), Some(reference)) => {
                self.score_prepared(&PreparedText::new(query), &PreparedText::new(reference))
            }
            _ => 0.0,
        }
    }
}

/// 1.0 when the compact reference is a substring of the compact query.
pub fn exact_subsequence_score(query: Option<&str>, reference: Option<&str>) -> f64 {
    Heuristic::ExactSubsequence.score(query, reference)
}

/// `|query ∩ reference| / |reference|` over token sets.
///
/// Token order is ignored and a reference token may be satisfied by any
/// query token. A reference with no tokens scores 0.0.
pub fn token_overlap_score(query: Option<&str>, reference: Option<&str>) -> f64 {
    Heuristic::TokenOverlap.score(query, reference)
}

/// Best token overlap after concatenating one adjacent pair of query tokens.
///
/// Handles "300HS" vs "300 HS". Only one pair is glued per candidate; a query
/// with fewer than two tokens scores 0.0.
pub fn adjacent_glue_score(query: Option<&str>, reference: Option<&str>) -> f64 {
    Heuristic::AdjacentGlue.score(query, reference)
}

/// Maximum over all heuristics, stopping at the first perfect score.
pub fn combined_score(query: Option<&str>, reference: Option<&str>) -> f64 {
    match (query, reference) {
        (Some(query), Some(reference)) => {
            combined_prepared(&PreparedText::new(query), &PreparedText::new(reference))
        }
        _ => 0.0,
    }
}

/// [`combined_score`] over already-normalized text.
pub fn combined_prepared(query: &PreparedText, reference: &PreparedText) -> f64 {
    let mut best = 0.0_f64;
    for heuristic in Heuristic::ALL {
        best = best.max(heuristic.score_prepared(query, reference));
        if best >= 1.0 {
            break;
        }
    }
    best
}

fn exact_subsequence_prepared(query: &PreparedText, reference: &PreparedText) -> f64 {
    if query.compact().contains(reference.compact()) {
        1.0
    } else {
        0.0
    }
}

fn overlap_ratio<S>(query: &BTreeSet<S>, reference: &BTreeSet<String>) -> f64
where
    S: std::borrow::Borrow<str> + Ord,
{
    if reference.is_empty() {
        return 0.0;
    }
    let shared = reference
        .iter()
        .filter(|token| query.contains(token.as_str()))
        .count();
    shared as f64 / reference.len() as f64
}

fn adjacent_glue_prepared(query: &PreparedText, reference: &PreparedText) -> f64 {
    let tokens = query.tokens();
    let mut best = 0.0_f64;
    for pair in 0..tokens.len().saturating_sub(1) {
        let glued = format!("{}{}", tokens[pair], tokens[pair + 1]);
        let mut candidate: BTreeSet<&str> = tokens
            .iter()
            .enumerate()
            .filter(|&(position, _)| position != pair && position != pair + 1)
            .map(|(_, token)| token.as_str())
            .collect();
        candidate.insert(glued.as_str());
        best = best.max(overlap_ratio(&candidate, reference.token_set()));
    }
    best
}
