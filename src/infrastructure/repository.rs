//! Journal directory repository

use crate::error::{Result, SouvenirError};
use crate::infrastructure::slot::FileSlot;
use crate::infrastructure::store::EntryStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .souvenir/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .souvenir/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .souvenir directory exists
    fn is_initialized(&self) -> bool;

    /// Create .souvenir directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks SOUVENIR_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SOUVENIR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_souvenir_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SouvenirError::Config(format!(
                    "SOUVENIR_ROOT is set to '{}' but no .souvenir directory found. \
                    Run 'souvenir init' in that directory or unset SOUVENIR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_souvenir_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SouvenirError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .souvenir directory
    fn has_souvenir_dir(path: &Path) -> bool {
        path.join(".souvenir").is_dir()
    }

    /// Open the entry store for this journal, named by the configured
    /// storage key.
    pub fn entry_store(&self) -> Result<EntryStore<FileSlot>> {
        let config = self.load_config()?;
        let path = self
            .root
            .join(".souvenir")
            .join(format!("{}.json", config.storage_key));
        Ok(EntryStore::new(FileSlot::new(path)))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_souvenir_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let souvenir_dir = self.root.join(".souvenir");

        if souvenir_dir.exists() {
            return Err(SouvenirError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&souvenir_dir)?;
        Ok(())
    }
}
