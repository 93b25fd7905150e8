//! Error types for catalog and listing ingestion.

use std::path::PathBuf;

use listmatch_model::CatalogError;
use thiserror::Error;

/// Errors that can occur while loading products or listings.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to open the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed partway through reading a line.
    #[error("failed to read line {line} of {path}: {source}")]
    LineRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    // === Record Errors ===
    /// A line is not valid JSON or lacks a required field.
    #[error("malformed record at {path}:{line}: {source}")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    // === Catalog Errors ===
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl IngestError {
    /// 1-based line number of the offending record, if the error has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::LineRead { line, .. } | Self::MalformedRecord { line, .. } => Some(*line),
            Self::FileRead { .. } | Self::Catalog(_) => None,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
