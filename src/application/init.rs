//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized souvenir journal at {}", path.display());

    Ok(())
}
