//! List entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// List all entries in stored order (newest first), optionally limited.
pub fn list_entries(repository: &FileSystemRepository, limit: Option<usize>) -> Result<Vec<Entry>> {
    let mut entries = repository.entry_store()?.list_entries();
    if let Some(n) = limit {
        entries.truncate(n);
    }
    Ok(entries)
}
