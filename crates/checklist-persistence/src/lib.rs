//! Snapshot files for checklist documents.
//!
//! A snapshot is pretty-printed JSON wrapping the checklist in a small
//! envelope:
//!
//! ```text
//! {
//!   "format": "checklist-studio",
//!   "formatVersion": 1,
//!   "savedAt": "2026-03-01T09:30:00Z",
//!   "checksum": "<sha-256 of the compact checklist JSON>",
//!   "checklist": { ... }
//! }
//! ```
//!
//! Loading also accepts a bare checklist document, which is what the JSON
//! export writes.
//!
//! - `types.rs` - the envelope
//! - `io/` - save, load and checksums
//! - `error.rs` - errors with user-facing messages

mod error;
mod io;
mod types;

pub use error::{PersistenceError, Result};
pub use io::{
    checklist_checksum, load_checklist, parse_snapshot, read_checklist, save_checklist,
    snapshot_to_string,
};
pub use types::{CURRENT_FORMAT_VERSION, FORMAT_TAG, SnapshotFile};
