//! End-to-end matching run.
//!
//! # Stage Order
//!
//! 1. **Classify** - best product per listing title ([`Matcher`])
//! 2. **Drop** - everything below a perfect title score
//! 3. **Disqualify** - cross-check secondary fields ([`ClusterValidator`])
//! 4. **Drop** - everything below a perfect field score
//! 5. **Group** - retained listings per product, in catalog order

use listmatch_model::{Catalog, Listing, MatchResult, ProductGroup, ValidatedMatch};
use tracing::{debug, info};

use crate::disqualify::ClusterValidator;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::options::MatchOptions;
use crate::progress::ProgressSink;

/// Counts collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub catalog_size: usize,
    pub listings: usize,
    /// Listings with a perfect title match after stage 1.
    pub classified: usize,
    /// Listings that also passed every disqualifier.
    pub retained: usize,
    /// Listings answered from the match cache.
    pub cache_hits: usize,
    /// Products with at least one retained listing.
    pub products_matched: usize,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub groups: Vec<ProductGroup>,
    pub stats: RunStats,
}

/// Classify, disqualify and group listings against a catalog.
pub struct MatchPipeline {
    options: MatchOptions,
    validator: ClusterValidator,
}

impl Default for MatchPipeline {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

impl MatchPipeline {
    /// Pipeline with the default manufacturer check.
    pub fn new(options: MatchOptions) -> Self {
        Self {
            options,
            validator: ClusterValidator::default(),
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: ClusterValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn run(
        &self,
        catalog: &Catalog,
        listings: &[Listing],
        progress: &(dyn ProgressSink + Sync),
    ) -> Result<PipelineOutcome> {
        let mut matcher = Matcher::with_options(catalog, self.options.clone())?;

        info!(
            products = catalog.len(),
            listings = listings.len(),
            parallel = self.options.parallel,
            "stage 1: classifying listing titles against product names"
        );
        let classified = if self.options.parallel {
            matcher.classify_parallel(listings, progress)?
        } else {
            matcher.classify(listings, progress)
        };
        let perfect: Vec<MatchResult> = classified
            .into_iter()
            .filter(MatchResult::is_perfect)
            .collect();
        info!(
            classified = perfect.len(),
            dropped = listings.len() - perfect.len(),
            cache_hits = matcher.cache().hits(),
            "stage 1 complete"
        );

        info!(
            fields = ?self.validator.fields(),
            "stage 2: disqualifying listings whose fields disagree with their product"
        );
        let validated = self.validator.disqualify(catalog, listings, &perfect);
        let (retained, rejected): (Vec<ValidatedMatch>, Vec<ValidatedMatch>) =
            validated.into_iter().partition(ValidatedMatch::is_retained);
        for rejection in &rejected {
            debug!(
                index = rejection.listing_index,
                product = %rejection.product_name,
                scores = ?rejection.field_scores,
                "listing disqualified"
            );
        }
        info!(
            retained = retained.len(),
            disqualified = rejected.len(),
            "stage 2 complete"
        );

        info!("stage 3: grouping retained listings by product");
        let groups = group_by_product(catalog, listings, &retained);

        let stats = RunStats {
            catalog_size: catalog.len(),
            listings: listings.len(),
            classified: perfect.len(),
            retained: retained.len(),
            cache_hits: matcher.cache().hits(),
            products_matched: groups.len(),
        };
        Ok(PipelineOutcome { groups, stats })
    }
}

/// Group retained listings under their product.
///
/// Groups follow catalog order and listings keep the order of `retained`.
/// Products without listings are omitted.
pub fn group_by_product(
    catalog: &Catalog,
    listings: &[Listing],
    retained: &[ValidatedMatch],
) -> Vec<ProductGroup> {
    let mut buckets: Vec<Vec<Listing>> = vec![Vec::new(); catalog.len()];
    for matched in retained {
        let (Some(position), Some(listing)) = (
            catalog.position(&matched.product_name),
            listings.get(matched.listing_index),
        ) else {
            continue;
        };
        buckets[position].push(listing.clone());
    }

    catalog
        .products()
        .iter()
        .zip(buckets)
        .filter(|(_, listings)| !listings.is_empty())
        .map(|(product, listings)| ProductGroup {
            product_name: product.name.clone(),
            listings,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use listmatch_model::{FieldScore, Product};

    use super::*;

    #[test]
    fn groups_follow_catalog_order_and_skip_empty_products() {
        let catalog = Catalog::new(vec![
            Product::new("Nikon D90", Some("Nikon")),
            Product::new("Sony DSC-W310", Some("Sony")),
            Product::new("Canon PowerShot A100", Some("Canon")),
        ])
        .unwrap();
        let listings = vec![
            Listing::new("Canon PowerShot A100 Black", Some("Canon")),
            Listing::new("Nikon D90 Body Only", Some("Nikon")),
            Listing::new("Canon PowerShot A100 Silver", Some("Canon")),
        ];
        let assignments = [
            (0, "Canon PowerShot A100"),
            (1, "Nikon D90"),
            (2, "Canon PowerShot A100"),
        ];
        let retained: Vec<ValidatedMatch> = assignments
            .into_iter()
            .map(|(index, name)| ValidatedMatch {
                listing_index: index,
                product_name: name.to_string(),
                field_scores: vec![FieldScore {
                    field: "manufacturer",
                    score: 1.0,
                }],
            })
            .collect();

        let groups = group_by_product(&catalog, &listings, &retained);
        let names: Vec<&str> = groups.iter().map(|g| g.product_name.as_str()).collect();
        assert_eq!(names, vec!["Nikon D90", "Canon PowerShot A100"]);
        assert_eq!(groups[1].listings[0].title(), Some("Canon PowerShot A100 Black"));
        assert_eq!(groups[1].listings[1].title(), Some("Canon PowerShot A100 Silver"));
    }
}
