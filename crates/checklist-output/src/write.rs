//! Writing exports to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use checklist_model::Checklist;
use chrono::NaiveDate;

use crate::csv::export_csv;
use crate::error::{OutputError, Result};
use crate::filename::export_file_name;
use crate::json::export_json;
use crate::types::ExportFormat;

/// Write `checklist` in `format` under `output_dir`, named after its title
/// and `date`. Returns the written path.
pub fn write_export(
    checklist: &Checklist,
    format: ExportFormat,
    output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        operation: "create",
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(export_file_name(
        &checklist.title,
        date,
        format.extension(),
    ));
    let file = File::create(&path).map_err(|source| OutputError::Io {
        operation: "create",
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_csv(checklist, &mut writer)?,
        ExportFormat::Json => {
            let json = export_json(checklist)?;
            writer
                .write_all(json.as_bytes())
                .map_err(|source| OutputError::Io {
                    operation: "write",
                    path: path.clone(),
                    source,
                })?;
        }
    }
    writer.flush().map_err(|source| OutputError::Io {
        operation: "write",
        path: path.clone(),
        source,
    })?;

    tracing::info!(%format, "Exported checklist to {}", path.display());
    Ok(path)
}
