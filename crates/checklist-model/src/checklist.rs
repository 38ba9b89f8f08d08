use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::column::{Column, MAX_COLUMNS, MIN_COLUMNS, default_columns};
use crate::error::ModelError;
use crate::ids::{ChecklistId, ColumnId, RowId};
use crate::row::Row;

/// Current schema version written into new documents.
pub const SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_TITLE: &str = "Untitled Checklist";
pub const DEFAULT_COLUMN_COUNT: usize = 3;

/// The checklist document.
///
/// Every row holds exactly one cell per column, in column order, and row
/// numbers run 1..=N in row order. [`Checklist::check_invariants`] verifies
/// both; [`Checklist::normalize`] repairs documents that arrive from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    pub version: u32,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::empty(DEFAULT_TITLE, DEFAULT_COLUMN_COUNT)
    }
}

impl Checklist {
    /// A fresh document with `column_count` default columns and no rows.
    pub fn empty(title: impl Into<String>, column_count: usize) -> Self {
        let now = Utc::now();
        Self {
            id: ChecklistId::generate(),
            title: title.into(),
            version: SCHEMA_VERSION,
            columns: default_columns(column_count),
            rows: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamp the modification time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == *column_id)
    }

    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == *column_id)
    }

    pub fn row(&self, row_id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == *row_id)
    }

    pub fn row_index(&self, row_id: &RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == *row_id)
    }

    pub fn cell(&self, row_id: &RowId, column_id: &ColumnId) -> Option<&Cell> {
        self.row(row_id).and_then(|row| row.cell(column_id))
    }

    pub fn column_ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.iter().map(|column| &column.id)
    }

    /// Set every row number to its position + 1.
    pub fn renumber_rows(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.row_number = index + 1;
        }
    }

    /// Check the structural invariants of the document.
    ///
    /// Reports the first violation found.
    pub fn check_invariants(&self) -> Result<(), ModelError> {
        let count = self.columns.len();
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&count) {
            return Err(ModelError::ColumnCount { count });
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.row_number != index + 1 {
                return Err(ModelError::RowNumber {
                    row: row.id.clone(),
                    expected: index + 1,
                    found: row.row_number,
                });
            }
            for column in &self.columns {
                if !row.cells.contains(&column.id) {
                    return Err(ModelError::MissingCell {
                        row: row.id.clone(),
                        column: column.id.clone(),
                    });
                }
            }
            if let Some(orphan) = row
                .cells
                .column_ids()
                .find(|id| self.column(id).is_none())
            {
                return Err(ModelError::OrphanCell {
                    row: row.id.clone(),
                    column: orphan.clone(),
                });
            }
            if !row.cells.matches(&self.columns) {
                return Err(ModelError::CellOrder { row: row.id.clone() });
            }
        }
        Ok(())
    }

    /// Repair a document loaded from outside so the invariants hold.
    ///
    /// Missing cells are created blank, orphaned cells dropped, cells put in
    /// column order and rows renumbered. Returns the number of rows touched.
    /// The column count is left alone; it is only bounded by edits.
    pub fn normalize(&mut self) -> usize {
        let mut repaired = 0;
        for (index, row) in self.rows.iter_mut().enumerate() {
            let mut touched = false;
            if !row.cells.matches(&self.columns) {
                row.cells = row.cells.aligned_to(&self.columns);
                touched = true;
            }
            if row.row_number != index + 1 {
                row.row_number = index + 1;
                touched = true;
            }
            if touched {
                repaired += 1;
            }
        }
        repaired
    }
}
