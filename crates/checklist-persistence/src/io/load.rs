//! Snapshot loading.

use std::fs;
use std::path::Path;

use checklist_model::Checklist;
use serde_json::Value;

use crate::error::{PersistenceError, Result};
use crate::io::hash::checklist_checksum;
use crate::types::{CURRENT_FORMAT_VERSION, FORMAT_TAG, SnapshotFile};

/// Load a checklist from a snapshot file or a bare JSON export.
///
/// The returned document satisfies the row/column invariants; rows that
/// did not are repaired and a warning is logged.
pub fn load_checklist(path: &Path) -> Result<Checklist> {
    let mut checklist = read_checklist(path)?;
    repair(&mut checklist, path);

    tracing::info!(
        checklist = %checklist.id,
        rows = checklist.rows.len(),
        columns = checklist.columns.len(),
        "Loaded checklist from {}",
        path.display()
    );
    Ok(checklist)
}

/// Read a checklist exactly as stored, without repairing rows.
///
/// Format, version and checksum are still checked.
pub fn read_checklist(path: &Path) -> Result<Checklist> {
    let content = fs::read_to_string(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(&content, path)
}

/// Parse snapshot text and repair its rows. `path` is only used in error
/// reports.
pub fn parse_snapshot(content: &str, path: &Path) -> Result<Checklist> {
    let mut checklist = decode(content, path)?;
    repair(&mut checklist, path);
    Ok(checklist)
}

fn decode(content: &str, path: &Path) -> Result<Checklist> {
    // `header` is only consulted for top-level keys. Documents are read from
    // the text itself so row cells keep their stored column order.
    let header: Value = serde_json::from_str(content).map_err(deserialization)?;

    let Some(object) = header.as_object() else {
        return Err(invalid(path, "expected a JSON object"));
    };

    if object.contains_key("format") {
        check_envelope(&header, path)?;
        let snapshot: SnapshotFile = serde_json::from_str(content).map_err(deserialization)?;
        verify_checksum(snapshot, path)
    } else if object.contains_key("columns") && object.contains_key("rows") {
        serde_json::from_str(content).map_err(deserialization)
    } else {
        Err(invalid(path, "neither a snapshot nor a checklist document"))
    }
}

fn repair(checklist: &mut Checklist, path: &Path) {
    let repaired = checklist.normalize();
    if repaired > 0 {
        tracing::warn!(
            checklist = %checklist.id,
            rows = repaired,
            "repaired rows that did not match the column set in {}",
            path.display()
        );
    }
}

fn check_envelope(header: &Value, path: &Path) -> Result<()> {
    match header.get("format").and_then(Value::as_str) {
        Some(FORMAT_TAG) => {}
        Some(other) => return Err(invalid(path, &format!("unknown format tag \"{other}\""))),
        None => return Err(invalid(path, "format tag is not a string")),
    }

    let version = header
        .get("formatVersion")
        .and_then(Value::as_u64)
        .ok_or_else(|| invalid(path, "missing formatVersion"))?;
    if version > u64::from(CURRENT_FORMAT_VERSION) {
        return Err(PersistenceError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_FORMAT_VERSION,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn verify_checksum(snapshot: SnapshotFile, path: &Path) -> Result<Checklist> {
    if let Some(expected) = snapshot.checksum {
        let actual = checklist_checksum(&snapshot.checklist)?;
        if actual != expected {
            return Err(PersistenceError::ChecksumMismatch {
                path: path.to_path_buf(),
                expected,
                actual,
            });
        }
    }
    Ok(snapshot.checklist)
}

fn invalid(path: &Path, reason: &str) -> PersistenceError {
    PersistenceError::InvalidFormat {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn deserialization(e: serde_json::Error) -> PersistenceError {
    PersistenceError::Deserialization {
        source: Box::new(e),
    }
}
