//! Catalog and listing ingestion.
//!
//! Both inputs are JSON-lines files: one object per line, blank lines
//! skipped. Products must name themselves with `product_name`; everything
//! else on either record type is optional and unknown keys are ignored.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listmatch_ingest::{load_catalog, read_listings};
//!
//! let catalog = load_catalog(Path::new("products.txt"))?;
//! let listings = read_listings(Path::new("listings.txt"))?;
//! ```

mod error;
mod jsonl;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === Generic Reading ===
pub use jsonl::{read_jsonl, read_jsonl_file};

// === Records ===
pub use records::{
    load_catalog, parse_catalog, parse_listings, parse_products, read_listings, read_products,
};
