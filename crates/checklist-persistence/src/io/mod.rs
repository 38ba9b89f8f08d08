//! File I/O for snapshot files.
//!
//! - Saving with atomic writes
//! - Loading with format, version and checksum checks
//! - SHA-256 checksums of documents

mod hash;
mod load;
mod save;

pub use hash::checklist_checksum;
pub use load::{load_checklist, parse_snapshot, read_checklist};
pub use save::{save_checklist, snapshot_to_string};
