//! The checklist store: one live document plus its undo/redo history.

use std::sync::Arc;

use checklist_model::{
    Cell, CellUpdate, Checklist, Column, ColumnId, ColumnUpdate, NewColumn, Row, RowId,
    SchemaReport, validate_columns,
};
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::EditError;
use crate::history::History;
use crate::ops::{self, EditResult};

/// What happened to a requested edit.
///
/// A rejected edit changed nothing, neither the document nor the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected(EditError),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn rejection(&self) -> Option<&EditError> {
        match self {
            Self::Applied => None,
            Self::Rejected(error) => Some(error),
        }
    }
}

/// Owns the current checklist and the history of every applied edit.
///
/// Each mutating method computes the next document with [`crate::ops`],
/// records it and makes it current. Returned documents are shared snapshots
/// and are never modified afterwards.
#[derive(Debug, Clone)]
pub struct ChecklistStore {
    config: StoreConfig,
    current: Arc<Checklist>,
    history: History,
}

impl Default for ChecklistStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl ChecklistStore {
    /// A store holding a fresh empty checklist and no history.
    pub fn new(config: StoreConfig) -> Self {
        let current = Arc::new(fresh_checklist(&config));
        let history = History::new(config.history_capacity);
        Self {
            config,
            current,
            history,
        }
    }

    /// A store editing `checklist`, which becomes the oldest undo state.
    ///
    /// Fails when the document's columns are out of bounds or repeat an id.
    pub fn open(config: StoreConfig, mut checklist: Checklist) -> Result<Self, EditError> {
        ops::check_column_set(&checklist.columns)?;
        repair(&mut checklist);
        let history = History::new(config.history_capacity);
        Ok(Self {
            config,
            current: Arc::new(checklist),
            history,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------------

    pub fn checklist(&self) -> &Checklist {
        &self.current
    }

    /// The current document as a shared snapshot, e.g. for saving.
    pub fn snapshot(&self) -> Arc<Checklist> {
        Arc::clone(&self.current)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.current.column(column_id)
    }

    pub fn row(&self, row_id: &RowId) -> Option<&Row> {
        self.current.row(row_id)
    }

    pub fn cell(&self, row_id: &RowId, column_id: &ColumnId) -> Option<&Cell> {
        self.current.cell(row_id, column_id)
    }

    pub fn total_rows(&self) -> usize {
        self.current.rows.len()
    }

    pub fn total_columns(&self) -> usize {
        self.current.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.rows.is_empty()
    }

    /// Advisory validation of the current columns.
    pub fn schema_report(&self) -> SchemaReport {
        validate_columns(&self.current.columns)
    }

    // ---------------------------------------------------------------------
    // Edits
    // ---------------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) -> EditOutcome {
        let result = ops::set_title(&self.current, title);
        self.commit("set_title", result)
    }

    pub fn add_column(&mut self, column: NewColumn) -> EditOutcome {
        let result = ops::add_column(&self.current, column);
        self.commit("add_column", result)
    }

    pub fn update_column(&mut self, column_id: &ColumnId, update: ColumnUpdate) -> EditOutcome {
        let result = ops::update_column(&self.current, column_id, update);
        self.commit("update_column", result)
    }

    pub fn remove_column(&mut self, column_id: &ColumnId) -> EditOutcome {
        let result = ops::remove_column(&self.current, column_id);
        self.commit("remove_column", result)
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) -> EditOutcome {
        let result = ops::set_columns(&self.current, columns);
        self.commit("set_columns", result)
    }

    pub fn add_row(&mut self) -> EditOutcome {
        let result = ops::add_row(&self.current);
        self.commit("add_row", result)
    }

    pub fn add_rows(&mut self, count: usize) -> EditOutcome {
        let result = ops::add_rows(&self.current, count);
        self.commit("add_rows", result)
    }

    pub fn remove_row(&mut self, row_id: &RowId) -> EditOutcome {
        let result = ops::remove_row(&self.current, row_id);
        self.commit("remove_row", result)
    }

    pub fn remove_rows(&mut self, row_ids: &[RowId]) -> EditOutcome {
        let result = ops::remove_rows(&self.current, row_ids);
        self.commit("remove_rows", result)
    }

    pub fn duplicate_row(&mut self, row_id: &RowId) -> EditOutcome {
        let result = ops::duplicate_row(&self.current, row_id);
        self.commit("duplicate_row", result)
    }

    pub fn reorder_rows(&mut self, from: usize, to: usize) -> EditOutcome {
        let result = ops::reorder_rows(&self.current, from, to);
        self.commit("reorder_rows", result)
    }

    pub fn update_cell(
        &mut self,
        row_id: &RowId,
        column_id: &ColumnId,
        update: CellUpdate,
    ) -> EditOutcome {
        let result = ops::update_cell(&self.current, row_id, column_id, update);
        self.commit("update_cell", result)
    }

    pub fn add_sub_field(
        &mut self,
        row_id: &RowId,
        column_id: &ColumnId,
        text: impl Into<String>,
    ) -> EditOutcome {
        let result = ops::add_sub_field(&self.current, row_id, column_id, text);
        self.commit("add_sub_field", result)
    }

    pub fn remove_sub_field(
        &mut self,
        row_id: &RowId,
        column_id: &ColumnId,
        index: usize,
    ) -> EditOutcome {
        let result = ops::remove_sub_field(&self.current, row_id, column_id, index);
        self.commit("remove_sub_field", result)
    }

    pub fn update_sub_field(
        &mut self,
        row_id: &RowId,
        column_id: &ColumnId,
        index: usize,
        text: impl Into<String>,
    ) -> EditOutcome {
        let result = ops::update_sub_field(&self.current, row_id, column_id, index, text);
        self.commit("update_sub_field", result)
    }

    /// Replace the document with `checklist` as a new, undoable entry.
    ///
    /// Prior history is kept. Rows that do not line up with the columns are
    /// repaired first; a column set the editor could not produce is
    /// rejected.
    pub fn load_checklist(&mut self, mut checklist: Checklist) -> EditOutcome {
        let result = match ops::check_column_set(&checklist.columns) {
            Ok(()) => {
                repair(&mut checklist);
                Ok(checklist)
            }
            Err(error) => Err(error),
        };
        self.commit("load_checklist", result)
    }

    // ---------------------------------------------------------------------
    // History
    // ---------------------------------------------------------------------

    /// Step back one edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.current = previous;
                debug!(cursor = ?self.history.cursor(), "undo");
                true
            }
            None => false,
        }
    }

    /// Re-apply one undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.current = next;
                debug!(cursor = ?self.history.cursor(), "redo");
                true
            }
            None => false,
        }
    }

    /// Start over with a fresh empty checklist and no history.
    pub fn reset(&mut self) {
        self.history.reset();
        self.current = Arc::new(fresh_checklist(&self.config));
        debug!("store reset");
    }

    fn commit(&mut self, operation: &'static str, result: EditResult) -> EditOutcome {
        match result {
            Ok(next) => {
                // The document in place before the first recorded edit is the
                // oldest undo state.
                if self.history.is_empty() {
                    self.history.record(Arc::clone(&self.current));
                }
                let next = Arc::new(next);
                self.history.record(Arc::clone(&next));
                self.current = next;
                debug!(
                    operation,
                    rows = self.current.rows.len(),
                    columns = self.current.columns.len(),
                    history = self.history.len(),
                    "edit applied"
                );
                EditOutcome::Applied
            }
            Err(error) => {
                warn!(operation, %error, "edit rejected");
                EditOutcome::Rejected(error)
            }
        }
    }
}

fn fresh_checklist(config: &StoreConfig) -> Checklist {
    Checklist::empty(config.default_title.clone(), config.default_column_count)
}

fn repair(checklist: &mut Checklist) {
    let repaired = checklist.normalize();
    if repaired > 0 {
        warn!(
            checklist = %checklist.id,
            rows = repaired,
            "repaired rows that did not match the column set"
        );
    }
}
