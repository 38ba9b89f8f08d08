//! The snapshot envelope.

use chrono::{DateTime, Utc};
use checklist_model::Checklist;
use serde::{Deserialize, Serialize};

/// Value of the `format` field.
pub const FORMAT_TAG: &str = "checklist-studio";

/// Highest envelope version this build reads and the one it writes.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Root of a snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFile {
    pub format: String,
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    /// Hex SHA-256 of the compact checklist JSON. Optional so hand-edited
    /// files can drop it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    pub checklist: Checklist,
}

impl SnapshotFile {
    /// Wrap `checklist` with the current format header and no checksum.
    pub fn new(checklist: Checklist) -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            format_version: CURRENT_FORMAT_VERSION,
            saved_at: Utc::now(),
            checksum: None,
            checklist,
        }
    }

    #[must_use]
    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }
}
