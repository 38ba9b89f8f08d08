use std::path::PathBuf;

use checklist_cli::script::ScriptReport;
use checklist_model::{ModelError, SchemaReport};

/// Outcome of `checklist validate`.
#[derive(Debug)]
pub struct ValidationResult {
    pub file: PathBuf,
    pub title: String,
    pub rows: usize,
    pub columns: usize,
    /// Advisory label checks.
    pub schema: SchemaReport,
    /// First row/column consistency violation, if any.
    pub structure: Option<ModelError>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.schema.valid || self.structure.is_some()
    }
}

/// Outcome of `checklist edit`.
#[derive(Debug)]
pub struct EditSummary {
    pub report: ScriptReport,
    /// Where the result was written; `None` on a dry run.
    pub saved_to: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    pub can_undo: bool,
}
