use std::collections::HashSet;

use checklist_model::{
    Cell, Checklist, Column, ColumnId, ColumnUpdate, MAX_COLUMNS, MIN_COLUMNS, NewColumn,
};

use super::{EditResult, derive};
use crate::error::EditError;

/// Append a column and give every existing row a blank cell for it.
pub fn add_column(doc: &Checklist, column: NewColumn) -> EditResult {
    if doc.columns.len() >= MAX_COLUMNS {
        return Err(EditError::ColumnLimit);
    }
    let column = column.into_column(ColumnId::generate());
    Ok(derive(doc, |next| {
        for row in &mut next.rows {
            row.cells.push(column.id.clone(), Cell::empty());
        }
        next.columns.push(column);
    }))
}

/// Merge label, width or style changes into one column.
pub fn update_column(doc: &Checklist, column_id: &ColumnId, update: ColumnUpdate) -> EditResult {
    let index = doc
        .column_index(column_id)
        .ok_or_else(|| EditError::ColumnNotFound(column_id.clone()))?;
    Ok(derive(doc, |next| next.columns[index].apply(update)))
}

/// Remove a column together with its cell in every row.
pub fn remove_column(doc: &Checklist, column_id: &ColumnId) -> EditResult {
    if doc.columns.len() <= MIN_COLUMNS {
        return Err(EditError::LastColumn);
    }
    let index = doc
        .column_index(column_id)
        .ok_or_else(|| EditError::ColumnNotFound(column_id.clone()))?;
    Ok(derive(doc, |next| {
        next.columns.remove(index);
        for row in &mut next.rows {
            row.cells.remove(column_id);
        }
    }))
}

/// Replace the whole column set and re-derive every row against it.
///
/// Cells of surviving columns are kept, new columns get blank cells and
/// cells of dropped columns go away. Applying the same set twice changes
/// nothing the second time.
pub fn set_columns(doc: &Checklist, columns: Vec<Column>) -> EditResult {
    check_column_set(&columns)?;
    Ok(derive(doc, |next| {
        for row in &mut next.rows {
            row.cells = row.cells.aligned_to(&columns);
        }
        next.columns = columns;
    }))
}

/// A column set a document may hold: 1 to 10 columns with distinct ids.
pub fn check_column_set(columns: &[Column]) -> Result<(), EditError> {
    if columns.len() < MIN_COLUMNS {
        return Err(EditError::LastColumn);
    }
    if columns.len() > MAX_COLUMNS {
        return Err(EditError::ColumnLimit);
    }
    if let Some(duplicate) = first_duplicate_id(columns) {
        return Err(EditError::DuplicateColumn(duplicate));
    }
    Ok(())
}

fn first_duplicate_id(columns: &[Column]) -> Option<ColumnId> {
    let mut seen = HashSet::with_capacity(columns.len());
    columns
        .iter()
        .find(|column| !seen.insert(&column.id))
        .map(|column| column.id.clone())
}
