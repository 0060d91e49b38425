//! Configuration management

use crate::error::{Result, SouvenirError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the storage slot, matching the stored collection key.
pub const DEFAULT_STORAGE_KEY: &str = "travel_journal_entries";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the slot file (without extension) under `.souvenir/`
    pub storage_key: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .souvenir/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".souvenir").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SouvenirError::NotJournalDirectory(path.to_path_buf())
            } else {
                SouvenirError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SouvenirError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .souvenir/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let souvenir_dir = path.join(".souvenir");
        let config_path = souvenir_dir.join("config.toml");

        if !souvenir_dir.exists() {
            fs::create_dir(&souvenir_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SouvenirError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_uses_default_key() {
        let config = Config::new();
        assert_eq!(config.storage_key, "travel_journal_entries");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".souvenir").exists());
        assert!(temp.path().join(".souvenir/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.storage_key, config.storage_key);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            SouvenirError::NotJournalDirectory(_) => {}
            _ => panic!("Expected NotJournalDirectory error"),
        }
    }
}
