//! Result writing.
//!
//! One JSON document per product group, one group per line:
//!
//! ```text
//! {"product_name":"Nikon D90","listings":[{"title":...,"manufacturer":...,"currency":...,"price":...}]}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use listmatch_model::ProductGroup;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize group {product}: {source}")]
    Serialize {
        product: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Write `groups` as JSON lines and flush. Returns the number of lines written.
///
/// Non-ASCII text is written as-is, not escaped.
pub fn write_jsonl<W: Write>(mut writer: W, groups: &[ProductGroup]) -> Result<usize> {
    for group in groups {
        serde_json::to_writer(&mut writer, group).map_err(|source| OutputError::Serialize {
            product: group.product_name.clone(),
            source,
        })?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(groups.len())
}

/// Create (or truncate) `path` and write `groups` to it.
pub fn write_jsonl_file(path: &Path, groups: &[ProductGroup]) -> Result<usize> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let written = write_jsonl(BufWriter::new(file), groups)?;
    info!(path = %path.display(), groups = written, "wrote results");
    Ok(written)
}
