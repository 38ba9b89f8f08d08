//! Snapshot saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use checklist_model::Checklist;

use crate::error::{PersistenceError, Result};
use crate::io::hash::checklist_checksum;
use crate::types::SnapshotFile;

/// Save a checklist snapshot to `path`.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written snapshot behind.
pub fn save_checklist(checklist: &Checklist, path: &Path) -> Result<()> {
    let content = snapshot_to_string(checklist)?;

    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(content.as_bytes())
        .map_err(|e| PersistenceError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        checklist = %checklist.id,
        rows = checklist.rows.len(),
        "Saved checklist to {}",
        path.display()
    );
    Ok(())
}

/// Pretty JSON of the snapshot envelope around `checklist`, checksum
/// included.
pub fn snapshot_to_string(checklist: &Checklist) -> Result<String> {
    let checksum = checklist_checksum(checklist)?;
    let snapshot = SnapshotFile::new(checklist.clone()).with_checksum(checksum);
    let mut content =
        serde_json::to_string_pretty(&snapshot).map_err(|e| PersistenceError::Serialization {
            source: Box::new(e),
        })?;
    content.push('\n');
    Ok(content)
}
