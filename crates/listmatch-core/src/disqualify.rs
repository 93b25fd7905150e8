//! Stage 2: cross-check each classified listing against its product.
//!
//! A listing that matched a product on its title must also agree with that
//! product on every secondary field the validator checks. Each check is a
//! [`Disqualifier`]; today only the manufacturer is checked. Family, model
//! and currency/price checks would slot in as further disqualifiers.

use listmatch_model::{Catalog, FieldScore, Listing, MatchResult, Product, ValidatedMatch};
use tracing::warn;

use crate::score::combined_score;

/// A per-field check between a listing and the product it was assigned to.
pub trait Disqualifier: Send + Sync {
    /// Name of the listing field this check scores.
    fn field(&self) -> &'static str;

    /// Score in `[0, 1]`; anything below 1.0 disqualifies the listing.
    fn score(&self, listing: &Listing, product: &Product) -> f64;
}

/// Requires the listing manufacturer to agree with the product manufacturer.
///
/// Identical values score 1.0 directly, including a manufacturer missing on
/// both sides. Anything else falls through to the combined similarity score
/// with the listing as query, so a manufacturer missing on one side only
/// scores 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManufacturerDisqualifier;

impl Disqualifier for ManufacturerDisqualifier {
    fn field(&self) -> &'static str {
        "manufacturer"
    }

    fn score(&self, listing: &Listing, product: &Product) -> f64 {
        let listing_manufacturer = listing.manufacturer();
        let product_manufacturer = product.manufacturer.as_deref();
        if listing_manufacturer == product_manufacturer {
            return 1.0;
        }
        combined_score(listing_manufacturer, product_manufacturer)
    }
}

/// Runs every configured disqualifier over classified listings.
pub struct ClusterValidator {
    disqualifiers: Vec<Box<dyn Disqualifier>>,
}

impl Default for ClusterValidator {
    fn default() -> Self {
        Self::empty().with_disqualifier(Box::new(ManufacturerDisqualifier))
    }
}

impl ClusterValidator {
    /// A validator with no checks; every classified listing passes.
    pub fn empty() -> Self {
        Self {
            disqualifiers: Vec::new(),
        }
    }

    /// Append a check. Checks run in insertion order.
    #[must_use]
    pub fn with_disqualifier(mut self, disqualifier: Box<dyn Disqualifier>) -> Self {
        self.disqualifiers.push(disqualifier);
        self
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.disqualifiers.iter().map(|d| d.field()).collect()
    }

    /// Score every classified listing against its assigned product.
    ///
    /// Results keep the order of `classified`. Results without a product, or
    /// naming a product missing from the catalog, are skipped.
    pub fn disqualify(
        &self,
        catalog: &Catalog,
        listings: &[Listing],
        classified: &[MatchResult],
    ) -> Vec<ValidatedMatch> {
        let mut validated = Vec::with_capacity(classified.len());
        for result in classified {
            let Some(product_name) = result.product_name.as_deref() else {
                continue;
            };
            let Some(product) = catalog.get(product_name) else {
                warn!(product = product_name, "classified product is not in the catalog");
                continue;
            };
            let Some(listing) = listings.get(result.listing_index) else {
                warn!(index = result.listing_index, "classified listing index out of range");
                continue;
            };
            let field_scores = self
                .disqualifiers
                .iter()
                .map(|disqualifier| FieldScore {
                    field: disqualifier.field(),
                    score: disqualifier.score(listing, product),
                })
                .collect();
            validated.push(ValidatedMatch {
                listing_index: result.listing_index,
                product_name: product.name.clone(),
                field_scores,
            });
        }
        validated
    }
}
