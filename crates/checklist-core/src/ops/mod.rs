//! Mutation engine.
//!
//! Every operation is a pure function from the current document to the next
//! one. The input is never modified; the produced document carries a fresh
//! `updated_at`. Bound violations and missing targets come back as
//! [`EditError`] and leave nothing changed.

mod cells;
mod columns;
mod rows;

pub use cells::{add_sub_field, remove_sub_field, update_cell, update_sub_field};
pub use columns::{add_column, check_column_set, remove_column, set_columns, update_column};
pub use rows::{add_row, add_rows, duplicate_row, remove_row, remove_rows, reorder_rows};

use checklist_model::Checklist;

use crate::error::EditError;

/// Result of a single mutation.
pub type EditResult = Result<Checklist, EditError>;

/// Replace the title verbatim.
pub fn set_title(doc: &Checklist, title: impl Into<String>) -> EditResult {
    Ok(derive(doc, |next| next.title = title.into()))
}

/// Clone `doc`, apply `edit` to the copy and stamp it.
fn derive(doc: &Checklist, edit: impl FnOnce(&mut Checklist)) -> Checklist {
    let mut next = doc.clone();
    edit(&mut next);
    next.touch();
    next
}
