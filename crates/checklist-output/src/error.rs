//! Error types for export operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Creating the output directory or file failed.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;
