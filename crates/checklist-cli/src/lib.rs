//! Library side of the `checklist` binary: logging setup, config discovery
//! and edit scripts.

pub mod logging;
pub mod script;
pub mod settings;
