//! Data model for checklist documents.
//!
//! A [`Checklist`] is an ordered set of [`Column`]s and an ordered set of
//! [`Row`]s; each row holds one [`Cell`] per column. This crate defines the
//! shapes, their invariants and the advisory column validator. Editing and
//! history live in `checklist-core`.

pub mod cell;
pub mod checklist;
pub mod column;
pub mod error;
pub mod ids;
pub mod row;
pub mod style;
pub mod validate;

pub use cell::{Cell, CellUpdate};
pub use checklist::{Checklist, DEFAULT_COLUMN_COUNT, DEFAULT_TITLE, SCHEMA_VERSION};
pub use column::{
    Column, ColumnUpdate, MAX_COLUMNS, MIN_COLUMNS, NewColumn, balanced_widths, default_columns,
};
pub use error::{ModelError, Result};
pub use ids::{CellId, ChecklistId, ColumnId, RowId, new_id};
pub use row::{Row, RowCells};
pub use style::CellStyle;
pub use validate::{Labeled, SchemaReport, validate_columns};
