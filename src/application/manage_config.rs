//! Config management use case

use crate::error::{Result, SouvenirError};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SouvenirError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(SouvenirError::Config(format!(
                        "Invalid storage_key: '{}' (must be a plain file name)",
                        value
                    )));
                }
                config.storage_key = value.to_string();
            }
            "created" => {
                return Err(SouvenirError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SouvenirError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
