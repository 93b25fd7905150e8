//! Error types for matching operations.

use listmatch_model::CatalogError;
use thiserror::Error;

/// Errors that stop a matching run.
///
/// Listings that fail to match are not errors; they are dropped.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The catalog cannot be matched against.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The dedicated worker pool for parallel classification failed to start.
    #[error("failed to start matching worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;
