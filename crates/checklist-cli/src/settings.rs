//! Locating the store configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checklist_core::StoreConfig;

/// Platform config file, e.g. `~/.config/checklist-studio/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "ChecklistStudio", "checklist-studio")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the store configuration.
///
/// An explicit path must exist and parse. Without one, the platform config
/// file is used when present, else the built-in defaults.
pub fn load_store_config(explicit: Option<&Path>) -> Result<StoreConfig> {
    if let Some(path) = explicit {
        return StoreConfig::load_from(path)
            .with_context(|| format!("load config {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!("using config {}", path.display());
            StoreConfig::load_from(&path)
                .with_context(|| format!("load config {}", path.display()))
        }
        _ => Ok(StoreConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_capacity = 5\n").unwrap();

        let config = load_store_config(Some(&path)).unwrap();

        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.default_column_count, 3);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_store_config(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(error.to_string().starts_with("load config"));
    }
}
