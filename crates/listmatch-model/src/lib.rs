pub mod catalog;
pub mod error;
pub mod listing;
pub mod matching;
pub mod product;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use listing::Listing;
pub use matching::{FieldScore, MatchResult, PERFECT_SCORE, ProductGroup, ValidatedMatch};
pub use product::Product;
