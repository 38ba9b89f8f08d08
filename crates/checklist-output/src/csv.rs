//! CSV export.

use std::io::Write;

use checklist_model::{Cell, Checklist};

use crate::error::Result;

/// Placeholder written for a cell whose only content is an image.
const IMAGE_PLACEHOLDER: &str = "[image]";

/// Write `checklist` as CSV: a header of column labels, then one record per
/// row in row order.
pub fn export_csv<W: Write>(checklist: &Checklist, writer: W) -> Result<()> {
    let mut out = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    out.write_record(checklist.columns.iter().map(|column| column.label.as_str()))?;

    for row in &checklist.rows {
        let record: Vec<String> = checklist
            .columns
            .iter()
            .map(|column| row.cell(&column.id).map(cell_text).unwrap_or_default())
            .collect();
        out.write_record(&record)?;
    }

    out.flush().map_err(::csv::Error::from)?;
    tracing::debug!(
        checklist = %checklist.id,
        rows = checklist.rows.len(),
        "exported CSV"
    );
    Ok(())
}

/// Text content of a cell: the value, then one `• ` line per sub-field.
pub fn cell_text(cell: &Cell) -> String {
    if cell.value.is_empty() && cell.sub_fields.is_empty() && cell.image.is_some() {
        return IMAGE_PLACEHOLDER.to_string();
    }
    let mut text = cell.value.clone();
    for sub_field in &cell.sub_fields {
        text.push_str("\n• ");
        text.push_str(sub_field);
    }
    text
}
