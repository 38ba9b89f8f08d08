//! SHA-256 checksum of checklist payloads.

use checklist_model::Checklist;
use sha2::{Digest, Sha256};

use crate::error::{PersistenceError, Result};

/// Hex SHA-256 of the compact JSON form of `checklist`.
///
/// The document goes through `serde_json::Value` first so the digest
/// depends only on content, not on how the file was formatted.
pub fn checklist_checksum(checklist: &Checklist) -> Result<String> {
    let value = serde_json::to_value(checklist).map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })?;
    let bytes = serde_json::to_vec(&value).map_err(|e| PersistenceError::Serialization {
        source: Box::new(e),
    })?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_model::{Column, ColumnUpdate};

    #[test]
    fn checksum_follows_content() {
        let checklist = Checklist::empty("Preflight", 2);
        let first = checklist_checksum(&checklist).unwrap();
        assert_eq!(first.len(), 64);
        assert_eq!(checklist_checksum(&checklist.clone()).unwrap(), first);

        let mut renamed = checklist;
        renamed.title = "Postflight".into();
        assert_ne!(checklist_checksum(&renamed).unwrap(), first);
    }

    #[test]
    fn checksum_survives_reparsing_fractional_widths() {
        let mut checklist = Checklist::empty("Widths", 1);
        checklist.columns[0].apply(ColumnUpdate::width(39.430133835633676));
        checklist.columns.push(Column::new("Notes", 100.0 / 3.0));

        let text = serde_json::to_string(&checklist).unwrap();
        let reparsed: Checklist = serde_json::from_str(&text).unwrap();

        assert_eq!(reparsed.columns[0].width, 39.430133835633676);
        assert_eq!(
            checklist_checksum(&reparsed).unwrap(),
            checklist_checksum(&checklist).unwrap()
        );
    }
}
