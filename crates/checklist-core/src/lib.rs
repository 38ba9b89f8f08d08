//! Checklist editing core.
//!
//! - [`ops`]: pure mutation functions, one per edit
//! - [`history`]: bounded linear undo/redo over whole snapshots
//! - [`store`]: [`ChecklistStore`], the facade combining both
//! - [`config`]: [`StoreConfig`], loaded from TOML

pub mod config;
pub mod error;
pub mod history;
pub mod ops;
pub mod store;

pub use config::StoreConfig;
pub use error::{ConfigError, EditError};
pub use history::{DEFAULT_HISTORY_CAPACITY, History};
pub use store::{ChecklistStore, EditOutcome};
