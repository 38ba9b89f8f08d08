//! Error types for checklist edits and store configuration.

use std::path::PathBuf;

use checklist_model::{ColumnId, RowId};
use thiserror::Error;

/// Why an edit was not applied.
///
/// These never abort the editor: the store turns them into no-ops and hands
/// them back for optional feedback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EditError {
    #[error("a checklist can have at most 10 columns")]
    ColumnLimit,
    #[error("a checklist needs at least one column")]
    LastColumn,
    #[error("column {0} not found")]
    ColumnNotFound(ColumnId),
    #[error("column {0} appears more than once")]
    DuplicateColumn(ColumnId),
    #[error("row {0} not found")]
    RowNotFound(RowId),
    #[error("none of the {count} requested rows exist")]
    NoMatchingRows { count: usize },
    #[error("row {row} has no cell for column {column}")]
    CellNotFound { row: RowId, column: ColumnId },
    #[error("row index {index} is out of range for {len} rows")]
    RowIndexOutOfRange { index: usize, len: usize },
    #[error("sub-field {index} is out of range for {len} sub-fields")]
    SubFieldOutOfRange { index: usize, len: usize },
    #[error("nothing to add")]
    EmptyBatch,
}

/// Errors that can occur while loading a store configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
