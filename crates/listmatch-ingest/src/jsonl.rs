//! JSON-lines record reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read one record per non-blank line.
///
/// `origin` names the source in errors; line numbers are 1-based and count
/// blank lines. Unknown keys are ignored and missing optional keys become
/// `None`.
pub fn read_jsonl<T, R>(reader: R, origin: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut records = Vec::new();
    let mut blank = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| IngestError::LineRead {
            path: origin.to_path_buf(),
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            blank += 1;
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| IngestError::MalformedRecord {
            path: origin.to_path_buf(),
            line: line_number,
            source,
        })?;
        records.push(record);
    }
    debug!(
        path = %origin.display(),
        records = records.len(),
        blank,
        "read JSON-lines records"
    );
    Ok(records)
}

/// Open `path` and read it with [`read_jsonl`].
pub fn read_jsonl_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_jsonl(BufReader::new(file), path)
}
