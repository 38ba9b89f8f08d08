use serde::{Deserialize, Serialize};

use crate::ids::ColumnId;
use crate::style::CellStyle;

/// Fewest columns a checklist may have.
pub const MIN_COLUMNS: usize = 1;
/// Most columns a checklist may have.
pub const MAX_COLUMNS: usize = 10;

/// A schema slot of the checklist table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    /// Header text. Expected to be non-empty; see [`crate::validate_columns`].
    pub label: String,
    /// Percentage of the total table width.
    pub width: f64,
    /// Header style only; cells keep their own style.
    #[serde(default)]
    pub style: CellStyle,
}

impl Column {
    pub fn new(label: impl Into<String>, width: f64) -> Self {
        NewColumn::new(label, width).into_column(ColumnId::generate())
    }

    pub fn apply(&mut self, update: ColumnUpdate) {
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(style) = update.style {
            self.style = style;
        }
    }
}

/// A column as requested by the caller, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewColumn {
    pub label: String,
    pub width: f64,
    #[serde(default)]
    pub style: CellStyle,
}

impl NewColumn {
    pub fn new(label: impl Into<String>, width: f64) -> Self {
        Self {
            label: label.into(),
            width,
            style: CellStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    pub fn into_column(self, id: ColumnId) -> Column {
        Column {
            id,
            label: self.label,
            width: self.width,
            style: self.style,
        }
    }
}

/// Partial column update (rename, resize, restyle).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<CellStyle>,
}

impl ColumnUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }
}

/// `Column 1..=count`, each `floor(100 / count)` percent wide.
pub fn default_columns(count: usize) -> Vec<Column> {
    let count = count.clamp(MIN_COLUMNS, MAX_COLUMNS);
    let width = (100 / count) as f64;
    (1..=count)
        .map(|index| Column::new(format!("Column {index}"), width))
        .collect()
}

/// Integer widths for `count` columns that add up to exactly 100.
///
/// The first `100 % count` columns absorb the remainder, one point each.
pub fn balanced_widths(count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let base = 100 / count;
    let remainder = 100 - base * count;
    (0..count)
        .map(|index| {
            if index < remainder {
                (base + 1) as f64
            } else {
                base as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_match_legacy_layout() {
        let columns = default_columns(3);
        let labels: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Column 1", "Column 2", "Column 3"]);
        assert!(columns.iter().all(|c| c.width == 33.0));
        assert_ne!(columns[0].id, columns[1].id);
    }

    #[test]
    fn default_columns_respect_bounds() {
        assert_eq!(default_columns(0).len(), MIN_COLUMNS);
        assert_eq!(default_columns(42).len(), MAX_COLUMNS);
    }

    #[test]
    fn balanced_widths_sum_to_hundred() {
        for count in 1..=MAX_COLUMNS {
            let widths = balanced_widths(count);
            assert_eq!(widths.len(), count);
            assert_eq!(widths.iter().sum::<f64>(), 100.0, "count {count}");
        }
        assert_eq!(balanced_widths(3), vec![34.0, 33.0, 33.0]);
        assert!(balanced_widths(0).is_empty());
    }

    #[test]
    fn update_resizes_without_touching_label() {
        let mut column = Column::new("Task", 50.0);
        column.apply(ColumnUpdate::width(25.0));
        assert_eq!(column.label, "Task");
        assert_eq!(column.width, 25.0);
    }
}
