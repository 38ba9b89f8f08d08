//! Edit scripts: a JSON array of commands applied to one store session.
//!
//! ```json
//! [
//!   { "op": "set_title", "title": "Engine start" },
//!   { "op": "add_rows", "count": 3 },
//!   { "op": "update_cell", "row": 1, "column": "Status", "update": { "value": "OK" } },
//!   { "op": "undo" }
//! ]
//! ```
//!
//! Rows are referenced by row number (as shown by `checklist show`) or by
//! id. Columns are referenced by 1-based position, id or label. `from`,
//! `to` and sub-field `index` values are zero-based, as in the store.

use std::fmt;
use std::path::{Path, PathBuf};

use checklist_core::{ChecklistStore, EditError, EditOutcome};
use checklist_model::{CellUpdate, Checklist, Column, ColumnId, ColumnUpdate, NewColumn, RowId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A row reference: row number or id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowRef {
    Number(usize),
    Id(String),
}

/// A column reference: 1-based position, id or label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    Position(usize),
    Name(String),
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "row {number}"),
            Self::Id(id) => write!(f, "row {id}"),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "column {position}"),
            Self::Name(name) => write!(f, "column \"{name}\""),
        }
    }
}

/// One entry of a `set_columns` command: keep an existing column, or add a
/// new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    Keep { keep: ColumnRef },
    New(NewColumn),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    SetTitle {
        title: String,
    },
    AddColumn {
        column: NewColumn,
    },
    UpdateColumn {
        column: ColumnRef,
        update: ColumnUpdate,
    },
    RemoveColumn {
        column: ColumnRef,
    },
    SetColumns {
        columns: Vec<ColumnSpec>,
    },
    AddRow,
    AddRows {
        count: usize,
    },
    RemoveRow {
        row: RowRef,
    },
    RemoveRows {
        rows: Vec<RowRef>,
    },
    DuplicateRow {
        row: RowRef,
    },
    ReorderRows {
        from: usize,
        to: usize,
    },
    UpdateCell {
        row: RowRef,
        column: ColumnRef,
        update: CellUpdate,
    },
    AddSubField {
        row: RowRef,
        column: ColumnRef,
        text: String,
    },
    RemoveSubField {
        row: RowRef,
        column: ColumnRef,
        index: usize,
    },
    UpdateSubField {
        row: RowRef,
        column: ColumnRef,
        index: usize,
        text: String,
    },
    /// Replace the document with a snapshot file, undoably.
    Load {
        path: PathBuf,
    },
    Undo,
    Redo,
    Reset,
}

impl EditCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTitle { .. } => "set_title",
            Self::AddColumn { .. } => "add_column",
            Self::UpdateColumn { .. } => "update_column",
            Self::RemoveColumn { .. } => "remove_column",
            Self::SetColumns { .. } => "set_columns",
            Self::AddRow => "add_row",
            Self::AddRows { .. } => "add_rows",
            Self::RemoveRow { .. } => "remove_row",
            Self::RemoveRows { .. } => "remove_rows",
            Self::DuplicateRow { .. } => "duplicate_row",
            Self::ReorderRows { .. } => "reorder_rows",
            Self::UpdateCell { .. } => "update_cell",
            Self::AddSubField { .. } => "add_sub_field",
            Self::RemoveSubField { .. } => "remove_sub_field",
            Self::UpdateSubField { .. } => "update_sub_field",
            Self::Load { .. } => "load",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Reset => "reset",
        }
    }
}

/// Why a command could not be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("{0} does not exist")]
    UnknownRow(RowRef),
    #[error("{0} does not exist")]
    UnknownColumn(ColumnRef),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
    #[error("{0}")]
    Load(String),
}

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Applied,
    /// The store refused the edit.
    Rejected(EditError),
    /// The command never reached the store.
    Skipped(ScriptError),
}

impl StepOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Rejected(error) => write!(f, "rejected: {error}"),
            Self::Skipped(error) => write!(f, "skipped: {error}"),
        }
    }
}

impl From<EditOutcome> for StepOutcome {
    fn from(outcome: EditOutcome) -> Self {
        match outcome {
            EditOutcome::Applied => Self::Applied,
            EditOutcome::Rejected(error) => Self::Rejected(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// 1-based position in the script.
    pub step: usize,
    pub op: &'static str,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub steps: Vec<StepReport>,
}

impl ScriptReport {
    pub fn applied_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome.is_applied())
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.steps.len() - self.applied_count()
    }
}

/// Parse a script file's content.
pub fn parse_script(content: &str) -> serde_json::Result<Vec<EditCommand>> {
    serde_json::from_str(content)
}

/// Apply `commands` in order. A failed command changes nothing and does
/// not stop the script.
pub fn apply_script(store: &mut ChecklistStore, commands: Vec<EditCommand>) -> ScriptReport {
    let steps = commands
        .into_iter()
        .enumerate()
        .map(|(index, command)| {
            let op = command.name();
            let outcome = apply_command(store, command);
            if let StepOutcome::Skipped(error) = &outcome {
                tracing::warn!(step = index + 1, op, %error, "script step skipped");
            }
            StepReport {
                step: index + 1,
                op,
                outcome,
            }
        })
        .collect();
    ScriptReport { steps }
}

/// Apply a single command.
pub fn apply_command(store: &mut ChecklistStore, command: EditCommand) -> StepOutcome {
    match run(store, command) {
        Ok(outcome) => outcome.into(),
        Err(error) => StepOutcome::Skipped(error),
    }
}

fn run(store: &mut ChecklistStore, command: EditCommand) -> Result<EditOutcome, ScriptError> {
    let doc = store.snapshot();
    let outcome = match command {
        EditCommand::SetTitle { title } => store.set_title(title),
        EditCommand::AddColumn { column } => store.add_column(column),
        EditCommand::UpdateColumn { column, update } => {
            store.update_column(&resolve_column(&doc, &column)?, update)
        }
        EditCommand::RemoveColumn { column } => {
            store.remove_column(&resolve_column(&doc, &column)?)
        }
        EditCommand::SetColumns { columns } => {
            store.set_columns(resolve_column_specs(&doc, columns)?)
        }
        EditCommand::AddRow => store.add_row(),
        EditCommand::AddRows { count } => store.add_rows(count),
        EditCommand::RemoveRow { row } => store.remove_row(&resolve_row(&doc, &row)?),
        EditCommand::RemoveRows { rows } => {
            let ids = rows
                .iter()
                .map(|row| resolve_row(&doc, row))
                .collect::<Result<Vec<_>, _>>()?;
            store.remove_rows(&ids)
        }
        EditCommand::DuplicateRow { row } => store.duplicate_row(&resolve_row(&doc, &row)?),
        EditCommand::ReorderRows { from, to } => store.reorder_rows(from, to),
        EditCommand::UpdateCell {
            row,
            column,
            update,
        } => {
            let (row, column) = resolve_cell(&doc, &row, &column)?;
            store.update_cell(&row, &column, update)
        }
        EditCommand::AddSubField { row, column, text } => {
            let (row, column) = resolve_cell(&doc, &row, &column)?;
            store.add_sub_field(&row, &column, text)
        }
        EditCommand::RemoveSubField { row, column, index } => {
            let (row, column) = resolve_cell(&doc, &row, &column)?;
            store.remove_sub_field(&row, &column, index)
        }
        EditCommand::UpdateSubField {
            row,
            column,
            index,
            text,
        } => {
            let (row, column) = resolve_cell(&doc, &row, &column)?;
            store.update_sub_field(&row, &column, index, text)
        }
        EditCommand::Load { path } => store.load_checklist(load(&path)?),
        EditCommand::Undo => {
            if !store.undo() {
                return Err(ScriptError::NothingToUndo);
            }
            EditOutcome::Applied
        }
        EditCommand::Redo => {
            if !store.redo() {
                return Err(ScriptError::NothingToRedo);
            }
            EditOutcome::Applied
        }
        EditCommand::Reset => {
            store.reset();
            EditOutcome::Applied
        }
    };
    Ok(outcome)
}

fn load(path: &Path) -> Result<Checklist, ScriptError> {
    checklist_persistence::load_checklist(path).map_err(|error| {
        ScriptError::Load(format!("{}: {}", error.user_message(), path.display()))
    })
}

/// Row numbers must exist; ids are passed through so the store reports
/// unknown ones.
fn resolve_row(doc: &Checklist, row: &RowRef) -> Result<RowId, ScriptError> {
    match row {
        RowRef::Number(number) => doc
            .rows
            .iter()
            .find(|candidate| candidate.row_number == *number)
            .map(|candidate| candidate.id.clone())
            .ok_or_else(|| ScriptError::UnknownRow(row.clone())),
        RowRef::Id(id) => Ok(RowId::new(id.as_str())),
    }
}

/// Positions must exist; a name matches an id first, then a label, and is
/// otherwise passed through as an id.
fn resolve_column(doc: &Checklist, column: &ColumnRef) -> Result<ColumnId, ScriptError> {
    match column {
        ColumnRef::Position(position) => position
            .checked_sub(1)
            .and_then(|index| doc.columns.get(index))
            .map(|found| found.id.clone())
            .ok_or_else(|| ScriptError::UnknownColumn(column.clone())),
        ColumnRef::Name(name) => Ok(doc
            .columns
            .iter()
            .find(|found| found.id.as_str() == name.as_str())
            .or_else(|| doc.columns.iter().find(|found| found.label == *name))
            .map_or_else(|| ColumnId::new(name.as_str()), |found| found.id.clone())),
    }
}

fn resolve_cell(
    doc: &Checklist,
    row: &RowRef,
    column: &ColumnRef,
) -> Result<(RowId, ColumnId), ScriptError> {
    Ok((resolve_row(doc, row)?, resolve_column(doc, column)?))
}

/// Kept columns must exist here, since a made-up id would silently become
/// a new, empty column.
fn resolve_column_specs(
    doc: &Checklist,
    specs: Vec<ColumnSpec>,
) -> Result<Vec<Column>, ScriptError> {
    specs
        .into_iter()
        .map(|spec| match spec {
            ColumnSpec::Keep { keep } => {
                let id = resolve_column(doc, &keep)?;
                doc.column(&id)
                    .cloned()
                    .ok_or(ScriptError::UnknownColumn(keep))
            }
            ColumnSpec::New(column) => Ok(column.into_column(ColumnId::generate())),
        })
        .collect()
}
