use checklist_model::{Cell, CellUpdate, Checklist, ColumnId, RowId};

use super::{EditResult, derive};
use crate::error::EditError;

/// Merge a partial update into the cell at `(row_id, column_id)`.
pub fn update_cell(
    doc: &Checklist,
    row_id: &RowId,
    column_id: &ColumnId,
    update: CellUpdate,
) -> EditResult {
    let (row_index, _) = locate(doc, row_id, column_id)?;
    Ok(edit_cell(doc, row_index, column_id, |cell| cell.apply(update)))
}

/// Append a sub-field to a cell.
pub fn add_sub_field(
    doc: &Checklist,
    row_id: &RowId,
    column_id: &ColumnId,
    text: impl Into<String>,
) -> EditResult {
    let (row_index, _) = locate(doc, row_id, column_id)?;
    let text = text.into();
    Ok(edit_cell(doc, row_index, column_id, |cell| {
        cell.sub_fields.push(text);
    }))
}

pub fn remove_sub_field(
    doc: &Checklist,
    row_id: &RowId,
    column_id: &ColumnId,
    index: usize,
) -> EditResult {
    let (row_index, cell) = locate(doc, row_id, column_id)?;
    check_sub_field(cell, index)?;
    Ok(edit_cell(doc, row_index, column_id, |cell| {
        cell.sub_fields.remove(index);
    }))
}

pub fn update_sub_field(
    doc: &Checklist,
    row_id: &RowId,
    column_id: &ColumnId,
    index: usize,
    text: impl Into<String>,
) -> EditResult {
    let (row_index, cell) = locate(doc, row_id, column_id)?;
    check_sub_field(cell, index)?;
    let text = text.into();
    Ok(edit_cell(doc, row_index, column_id, |cell| {
        cell.sub_fields[index] = text;
    }))
}

fn locate<'a>(
    doc: &'a Checklist,
    row_id: &RowId,
    column_id: &ColumnId,
) -> Result<(usize, &'a Cell), EditError> {
    let row_index = doc
        .row_index(row_id)
        .ok_or_else(|| EditError::RowNotFound(row_id.clone()))?;
    let cell = doc.rows[row_index]
        .cell(column_id)
        .ok_or_else(|| EditError::CellNotFound {
            row: row_id.clone(),
            column: column_id.clone(),
        })?;
    Ok((row_index, cell))
}

fn check_sub_field(cell: &Cell, index: usize) -> Result<(), EditError> {
    let len = cell.sub_fields.len();
    if index >= len {
        return Err(EditError::SubFieldOutOfRange { index, len });
    }
    Ok(())
}

/// Apply `edit` to a cell already known to exist in `doc`.
fn edit_cell(
    doc: &Checklist,
    row_index: usize,
    column_id: &ColumnId,
    edit: impl FnOnce(&mut Cell),
) -> Checklist {
    derive(doc, |next| {
        if let Some(cell) = next.rows[row_index].cell_mut(column_id) {
            edit(cell);
        }
    })
}
