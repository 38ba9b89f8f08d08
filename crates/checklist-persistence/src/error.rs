//! Persistence error types.
//!
//! Every error carries a user-facing message and, where one exists, a hint
//! for fixing it.

use std::path::PathBuf;
use thiserror::Error;

/// Snapshot file error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is JSON but not a checklist snapshot.
    #[error("Invalid checklist file format: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    /// Written by a newer release.
    #[error("Checklist file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion {
        found: u64,
        max_supported: u32,
        path: PathBuf,
    },

    /// The checklist payload does not match the checksum stored beside it.
    #[error("Checklist file checksum mismatch: {path}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Failed to serialize checklist data")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to deserialize checklist data")]
    Deserialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The temp file could not be moved over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// A user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidFormat { path, reason } => {
                format!(
                    "The file at {} is not a checklist file: {}",
                    path.display(),
                    reason
                )
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
                ..
            } => {
                format!(
                    "This checklist was saved by a newer version of Checklist Studio \
                    (file version {found}, this version reads up to {max_supported})."
                )
            }
            Self::ChecksumMismatch { path, .. } => {
                format!(
                    "The checklist in '{}' was changed outside Checklist Studio or is damaged.",
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("unknown")
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while writing the checklist data.".to_string()
            }
            Self::Deserialization { .. } => {
                "An error occurred while reading the checklist data. The file may be corrupted."
                    .to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// A hint for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => {
                Some("Make sure you selected a checklist snapshot or JSON export.".into())
            }
            Self::UnsupportedVersion { .. } => Some("Update Checklist Studio.".into()),
            Self::ChecksumMismatch { .. } => Some(
                "Remove the \"checksum\" field to accept the edited file as it is.".into(),
            ),
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => Some("Try opening a backup if you have one.".into()),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_suggest_checking_the_path() {
        let error = PersistenceError::Io {
            operation: "read",
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(
            error.user_message(),
            "Could not read the file at /tmp/missing.json"
        );
        assert!(error.suggestion().is_some_and(|hint| hint.contains("exists")));
    }

    #[test]
    fn checksum_message_names_the_file() {
        let error = PersistenceError::ChecksumMismatch {
            path: PathBuf::from("/data/walkaround.json"),
            expected: "aa".into(),
            actual: "bb".into(),
        };
        assert!(error.user_message().contains("'walkaround.json'"));
    }
}
