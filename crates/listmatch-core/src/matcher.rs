//! Stage 1: resolve each listing title to its best-scoring product name.
//!
//! Every title is scored against every product name with
//! [`combined_prepared`]; the best candidate under [`compare_candidates`]
//! wins. Titles repeat heavily in real feeds, so results are memoized per
//! exact title string in a [`MatchCache`] owned by the [`Matcher`].

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use listmatch_model::{Catalog, Listing, MatchResult, PERFECT_SCORE};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use crate::error::Result;
use crate::normalize::PreparedText;
use crate::options::MatchOptions;
use crate::progress::{Progress, ProgressSink, ProgressTracker};
use crate::score::combined_prepared;

/// A product name paired with the score it reached for one listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub score: f64,
    pub name: &'a str,
}

/// Ranking between two candidates for the same listing.
///
/// Higher score ranks higher; on equal scores the lexicographically greater
/// name ranks higher. The best candidate is the maximum under this ordering,
/// so ties always resolve to the same product regardless of catalog order.
pub fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.name.cmp(b.name))
}

/// Best product found for one title.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub score: f64,
    /// `None` when no product scored above zero.
    pub product_name: Option<String>,
}

impl BestMatch {
    fn none() -> Self {
        Self {
            score: 0.0,
            product_name: None,
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.product_name.is_some() && self.score == PERFECT_SCORE
    }

    fn into_result(self, listing_index: usize) -> MatchResult {
        MatchResult {
            listing_index,
            product_name: self.product_name,
            score: self.score,
        }
    }
}

/// Memoized best matches keyed by the exact, unnormalized title.
///
/// A missing title is a key of its own. The cache is not shared between
/// threads: parallel runs give every work unit a private shard and fold the
/// shards back in with [`MatchCache::merge`].
#[derive(Debug, Clone, Default)]
pub struct MatchCache {
    by_title: HashMap<String, BestMatch>,
    untitled: Option<BestMatch>,
    hits: usize,
}

impl MatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a title without counting a hit.
    pub fn peek(&self, title: Option<&str>) -> Option<&BestMatch> {
        match title {
            Some(title) => self.by_title.get(title),
            None => self.untitled.as_ref(),
        }
    }

    /// Look up a title, counting a hit when found.
    pub fn lookup(&mut self, title: Option<&str>) -> Option<BestMatch> {
        let found = self.peek(title).cloned();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    pub fn insert(&mut self, title: Option<&str>, best: BestMatch) {
        match title {
            Some(title) => {
                self.by_title.insert(title.to_string(), best);
            }
            None => self.untitled = Some(best),
        }
    }

    /// Fold another cache in. Existing entries win; hit counts add up.
    pub fn merge(&mut self, other: MatchCache) {
        for (title, best) in other.by_title {
            self.by_title.entry(title).or_insert(best);
        }
        if self.untitled.is_none() {
            self.untitled = other.untitled;
        }
        self.hits += other.hits;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of distinct titles cached.
    pub fn len(&self) -> usize {
        self.by_title.len() + usize::from(self.untitled.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn note_hit(&mut self) {
        self.hits += 1;
    }
}

#[derive(Debug)]
struct Reference<'c> {
    name: &'c str,
    text: PreparedText,
}

/// Classifies listing titles against a fixed catalog.
#[derive(Debug)]
pub struct Matcher<'c> {
    references: Vec<Reference<'c>>,
    cache: MatchCache,
    options: MatchOptions,
}

impl<'c> Matcher<'c> {
    /// Create a matcher with default options.
    ///
    /// Fails with `EmptyCatalog` before any scoring when there is nothing to
    /// match against.
    pub fn new(catalog: &'c Catalog) -> Result<Self> {
        Self::with_options(catalog, MatchOptions::default())
    }

    pub fn with_options(catalog: &'c Catalog, options: MatchOptions) -> Result<Self> {
        catalog.ensure_not_empty()?;
        let references: Vec<Reference<'c>> = catalog
            .names()
            .map(|name| Reference {
                name,
                text: PreparedText::new(name),
            })
            .collect();
        for reference in references.iter().filter(|r| r.text.is_blank()) {
            warn!(
                product = reference.name,
                "product name normalizes to empty text and will match every listing"
            );
        }
        Ok(Self {
            references,
            cache: MatchCache::new(),
            options,
        })
    }

    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Best product for one title, served from the cache when possible.
    pub fn best_match(&mut self, title: Option<&str>) -> BestMatch {
        self.resolve(title).0
    }

    /// Classify listings in order on the current thread.
    ///
    /// Returns one result per listing, in input order.
    pub fn classify(
        &mut self,
        listings: &[Listing],
        progress: &dyn ProgressSink,
    ) -> Vec<MatchResult> {
        let interval = self.options.progress_interval(listings.len());
        let mut tracker = ProgressTracker::new(listings.len(), interval);
        let mut results = Vec::with_capacity(listings.len());

        for (index, listing) in listings.iter().enumerate() {
            let (best, cache_hit) = self.resolve(listing.title());
            if let Some(snapshot) = tracker.record(best.is_perfect(), cache_hit) {
                progress.on_progress(&snapshot);
            }
            results.push(best.into_result(index));
        }

        progress.on_progress(&tracker.finish());
        results
    }

    /// Classify listings on a rayon pool.
    ///
    /// Work is split into chunks of `chunk_size` listings. Each chunk reads the
    /// matcher's existing cache and memoizes into a private shard; shards are
    /// merged afterwards. Results come back in input order and equal those of
    /// [`Self::classify`]. Progress is reported as chunks complete.
    pub fn classify_parallel(
        &mut self,
        listings: &[Listing],
        progress: &(dyn ProgressSink + Sync),
    ) -> Result<Vec<MatchResult>> {
        let total = listings.len();
        let chunk_size = self.options.chunk_size.max(1);
        let processed = AtomicUsize::new(0);
        let matched = AtomicUsize::new(0);
        let cache_hits = AtomicUsize::new(0);
        let references = self.references.as_slice();
        let base = &self.cache;

        let run = || {
            listings
                .par_chunks(chunk_size)
                .enumerate()
                .map(|(chunk_index, chunk)| {
                    let offset = chunk_index * chunk_size;
                    let mut shard = MatchCache::new();
                    let mut results = Vec::with_capacity(chunk.len());
                    let mut chunk_matched = 0;

                    for (position, listing) in chunk.iter().enumerate() {
                        let title = listing.title();
                        let best = if let Some(found) = base.peek(title) {
                            shard.note_hit();
                            found.clone()
                        } else if let Some(found) = shard.lookup(title) {
                            found
                        } else {
                            let best = search(references, title);
                            shard.insert(title, best.clone());
                            best
                        };
                        if best.is_perfect() {
                            chunk_matched += 1;
                        }
                        results.push(best.into_result(offset + position));
                    }

                    let done =
                        processed.fetch_add(chunk.len(), AtomicOrdering::Relaxed) + chunk.len();
                    let matched_so_far =
                        matched.fetch_add(chunk_matched, AtomicOrdering::Relaxed) + chunk_matched;
                    let hits_so_far =
                        cache_hits.fetch_add(shard.hits(), AtomicOrdering::Relaxed) + shard.hits();
                    if done < total {
                        progress.on_progress(&Progress {
                            processed: done,
                            total,
                            matched: matched_so_far,
                            cache_hits: hits_so_far,
                        });
                    }
                    (results, shard)
                })
                .collect::<Vec<_>>()
        };

        let chunks = match self.options.jobs {
            Some(jobs) => ThreadPoolBuilder::new().num_threads(jobs).build()?.install(run),
            None => run(),
        };

        let mut results = Vec::with_capacity(total);
        for (chunk_results, shard) in chunks {
            results.extend(chunk_results);
            self.cache.merge(shard);
        }

        progress.on_progress(&Progress {
            processed: total,
            total,
            matched: matched.into_inner(),
            cache_hits: cache_hits.into_inner(),
        });
        debug!(
            listings = total,
            cached_titles = self.cache.len(),
            "parallel classification finished"
        );
        Ok(results)
    }

    fn resolve(&mut self, title: Option<&str>) -> (BestMatch, bool) {
        if let Some(found) = self.cache.lookup(title) {
            return (found, true);
        }
        let best = search(&self.references, title);
        self.cache.insert(title, best.clone());
        (best, false)
    }
}

/// Score one title against every reference and keep the best candidate.
fn search(references: &[Reference<'_>], title: Option<&str>) -> BestMatch {
    let query = title.map(PreparedText::new);
    let best = references
        .iter()
        .map(|reference| Candidate {
            score: query
                .as_ref()
                .map_or(0.0, |query| combined_prepared(query, &reference.text)),
            name: reference.name,
        })
        .max_by(compare_candidates);

    match best {
        Some(candidate) if candidate.score > 0.0 => BestMatch {
            score: candidate.score,
            product_name: Some(candidate.name.to_string()),
        },
        _ => BestMatch::none(),
    }
}

#[cfg(test)]
mod tests {
    use listmatch_model::Product;

    use super::*;
    use crate::progress::NoProgress;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(names.iter().map(|name| Product::new(*name, None)).collect()).unwrap()
    }

    #[test]
    fn test_greater_score_wins() {
        let low = Candidate {
            score: 0.5,
            name: "zeta",
        };
        let high = Candidate {
            score: 1.0,
            name: "alpha",
        };
        assert_eq!(compare_candidates(&high, &low), Ordering::Greater);
    }

    #[test]
    fn test_tie_goes_to_greatest_name() {
        let a = Candidate {
            score: 1.0,
            name: "Canon EOS",
        };
        let b = Candidate {
            score: 1.0,
            name: "Canon EOS 7D",
        };
        assert_eq!(compare_candidates(&b, &a), Ordering::Greater);
        let best = [a, b].into_iter().max_by(compare_candidates).unwrap();
        assert_eq!(best.name, "Canon EOS 7D");
    }

    #[test]
    fn test_tie_break_ignores_catalog_order() {
        // Both names are contained in the title, so both score 1.0.
        let title = Some("Canon EOS 7D kit");
        let forward = catalog(&["Canon EOS", "Canon EOS 7D"]);
        let backward = catalog(&["Canon EOS 7D", "Canon EOS"]);

        let first = Matcher::new(&forward).unwrap().best_match(title);
        let second = Matcher::new(&backward).unwrap().best_match(title);

        assert_eq!(first.product_name.as_deref(), Some("Canon EOS 7D"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let empty = Catalog::new(Vec::new()).unwrap();
        let err = Matcher::new(&empty).unwrap_err();
        assert!(err.to_string().contains("no products"));
    }

    #[test]
    fn test_null_title_has_no_product() {
        let catalog = catalog(&["Nikon D90"]);
        let mut matcher = Matcher::new(&catalog).unwrap();
        assert_eq!(matcher.best_match(None), BestMatch::none());
    }

    #[test]
    fn test_zero_score_has_no_product() {
        let catalog = catalog(&["Nikon D90"]);
        let mut matcher = Matcher::new(&catalog).unwrap();
        let best = matcher.best_match(Some("Sony Cybershot"));
        assert_eq!(best.score, 0.0);
        assert!(best.product_name.is_none());
    }

    #[test]
    fn test_repeat_title_hits_cache() {
        let catalog = catalog(&["Nikon D90", "Canon PowerShot A100"]);
        let mut matcher = Matcher::new(&catalog).unwrap();

        let first = matcher.best_match(Some("Nikon D90 Body Only"));
        assert_eq!(matcher.cache().hits(), 0);
        let second = matcher.best_match(Some("Nikon D90 Body Only"));
        assert_eq!(matcher.cache().hits(), 1);
        assert_eq!(first, second);
        assert_eq!(first.score.to_bits(), second.score.to_bits());

        // Case differs, so this is a different key.
        matcher.best_match(Some("NIKON D90 BODY ONLY"));
        assert_eq!(matcher.cache().hits(), 1);
        assert_eq!(matcher.cache().len(), 2);
    }

    #[test]
    fn test_classify_keeps_input_order() {
        let catalog = catalog(&["Nikon D90", "Canon PowerShot A100"]);
        let listings = vec![
            Listing::new("Canon PowerShot A100 Black", None),
            Listing::default(),
            Listing::new("Nikon D90 Body Only", None),
        ];
        let mut matcher = Matcher::new(&catalog).unwrap();
        let results = matcher.classify(&listings, &NoProgress);

        let indices: Vec<usize> = results.iter().map(|r| r.listing_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(results[0].product_name.as_deref(), Some("Canon PowerShot A100"));
        assert!(results[1].product_name.is_none());
        assert_eq!(results[2].product_name.as_deref(), Some("Nikon D90"));
    }

    #[test]
    fn test_cache_merge_keeps_existing_entries() {
        let mut base = MatchCache::new();
        base.insert(
            Some("a"),
            BestMatch {
                score: 1.0,
                product_name: Some("A".to_string()),
            },
        );
        let mut shard = MatchCache::new();
        shard.insert(Some("a"), BestMatch::none());
        shard.insert(None, BestMatch::none());
        shard.note_hit();

        base.merge(shard);
        assert_eq!(base.len(), 2);
        assert_eq!(base.hits(), 1);
        assert_eq!(
            base.peek(Some("a")).and_then(|b| b.product_name.as_deref()),
            Some("A")
        );
    }
}
