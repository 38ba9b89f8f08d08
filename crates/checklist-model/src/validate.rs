use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::column::MAX_COLUMNS;

pub const NO_COLUMNS: &str = "at least one column required";
pub const TOO_MANY_COLUMNS: &str = "maximum of 10 columns";
pub const EMPTY_LABEL: &str = "all columns must have a label";
pub const DUPLICATE_LABELS: &str = "labels must be unique";

/// Anything that carries a column label.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for crate::Column {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for crate::NewColumn {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for String {
    fn label(&self) -> &str {
        self
    }
}

impl Labeled for &str {
    fn label(&self) -> &str {
        self
    }
}

/// Result of checking a candidate column set.
///
/// Advisory: a failing report does not stop the store from applying the
/// columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl SchemaReport {
    pub fn has_error(&self, message: &str) -> bool {
        self.errors.iter().any(|error| error == message)
    }
}

/// Validate a column set. Every rule is checked; all failures are reported.
pub fn validate_columns<C: Labeled>(columns: &[C]) -> SchemaReport {
    let mut errors = Vec::new();

    if columns.is_empty() {
        errors.push(NO_COLUMNS.to_string());
    }
    if columns.len() > MAX_COLUMNS {
        errors.push(TOO_MANY_COLUMNS.to_string());
    }
    if columns.iter().any(|column| column.label().trim().is_empty()) {
        errors.push(EMPTY_LABEL.to_string());
    }

    let mut seen = HashSet::new();
    let duplicated = columns
        .iter()
        .map(|column| column.label().trim().to_lowercase())
        .any(|label| !seen.insert(label));
    if duplicated {
        errors.push(DUPLICATE_LABELS.to_string());
    }

    SchemaReport {
        valid: errors.is_empty(),
        errors,
    }
}
