use thiserror::Error;

/// Structural problems with a product catalog.
///
/// These are the only fatal conditions in matching; a listing that fails to
/// match is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two products share the same name.
    #[error("duplicate product name in catalog: {0}")]
    DuplicateProduct(String),
    /// Matching was requested against a catalog with no products.
    #[error("catalog contains no products; nothing to match against")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
