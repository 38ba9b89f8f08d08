use thiserror::Error;

use crate::ids::{ColumnId, RowId};

/// A structural invariant of a checklist that does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("checklist has {count} columns, expected between 1 and 10")]
    ColumnCount { count: usize },
    #[error("row {row} is numbered {found}, expected {expected}")]
    RowNumber {
        row: RowId,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has no cell for column {column}")]
    MissingCell { row: RowId, column: ColumnId },
    #[error("row {row} has a cell for unknown column {column}")]
    OrphanCell { row: RowId, column: ColumnId },
    #[error("cells of row {row} are not in column order")]
    CellOrder { row: RowId },
}

pub type Result<T> = std::result::Result<T, ModelError>;
