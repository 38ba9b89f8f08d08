//! Store configuration.
//!
//! Read from a TOML file; every field is optional and falls back to the
//! defaults below.

use std::path::Path;

use checklist_model::{DEFAULT_COLUMN_COUNT, DEFAULT_TITLE, MAX_COLUMNS, MIN_COLUMNS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::history::DEFAULT_HISTORY_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of snapshots kept for undo/redo.
    pub history_capacity: usize,
    /// Columns created for a new, empty checklist.
    pub default_column_count: usize,
    /// Title given to a new, empty checklist.
    pub default_title: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            default_column_count: DEFAULT_COLUMN_COUNT,
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML content and clamp values into their valid ranges.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self.sanitized()
    }

    #[must_use]
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    #[must_use]
    pub fn with_default_column_count(mut self, count: usize) -> Self {
        self.default_column_count = count;
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        self.history_capacity = self.history_capacity.max(1);
        self.default_column_count = self.default_column_count.clamp(MIN_COLUMNS, MAX_COLUMNS);
        self
    }
}
