//! Checklist exports.
//!
//! - **CSV**: one record per row, cell sub-fields as bullet lines
//! - **JSON**: the checklist document itself, pretty-printed
//!
//! [`write_export`] writes either format under an output directory using
//! the `<Title>_<YYYY-MM-DD>.<ext>` naming scheme.

mod csv;
mod error;
mod filename;
mod json;
mod types;
mod write;

pub use crate::csv::{cell_text, export_csv};
pub use error::{OutputError, Result};
pub use filename::export_file_name;
pub use json::export_json;
pub use types::ExportFormat;
pub use write::write_export;
