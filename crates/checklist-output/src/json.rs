//! JSON export.

use checklist_model::Checklist;

use crate::error::Result;

/// The checklist as pretty-printed JSON, in the same shape snapshots embed.
pub fn export_json(checklist: &Checklist) -> Result<String> {
    let mut json = serde_json::to_string_pretty(checklist)?;
    json.push('\n');
    Ok(json)
}
