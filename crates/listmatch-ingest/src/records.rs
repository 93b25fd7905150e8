//! Product and listing loaders.

use std::io::BufRead;
use std::path::Path;

use listmatch_model::{Catalog, Listing, Product};
use tracing::info;

use crate::error::Result;
use crate::jsonl::{read_jsonl, read_jsonl_file};

/// Parse products from in-memory JSON lines.
///
/// Every record must carry `product_name`; other fields are optional.
pub fn parse_products<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Product>> {
    read_jsonl(reader, origin)
}

/// Parse listings from in-memory JSON lines. All listing fields are optional.
pub fn parse_listings<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Listing>> {
    read_jsonl(reader, origin)
}

pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    let products: Vec<Product> = read_jsonl_file(path)?;
    info!(path = %path.display(), count = products.len(), "loaded products");
    Ok(products)
}

pub fn read_listings(path: &Path) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> = read_jsonl_file(path)?;
    info!(path = %path.display(), count = listings.len(), "loaded listings");
    Ok(listings)
}

/// Load a product file into a [`Catalog`].
///
/// Duplicate product names fail with [`CatalogError::DuplicateProduct`]. An
/// empty file yields an empty catalog; matching against it is rejected later.
///
/// [`CatalogError::DuplicateProduct`]: listmatch_model::CatalogError::DuplicateProduct
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Ok(Catalog::new(read_products(path)?)?)
}

/// Like [`load_catalog`], over an in-memory reader.
pub fn parse_catalog<R: BufRead>(reader: R, origin: &Path) -> Result<Catalog> {
    Ok(Catalog::new(parse_products(reader, origin)?)?)
}
