//! Show entry use case

use crate::domain::Entry;
use crate::error::{Result, SouvenirError};
use crate::infrastructure::FileSystemRepository;

/// Fetch a single entry by id. Unknown ids are an error at this surface,
/// unlike store-level update/delete which treat them as benign no-ops.
pub fn show_entry(repository: &FileSystemRepository, id: &str) -> Result<Entry> {
    repository
        .entry_store()?
        .get_entry(id)
        .ok_or_else(|| SouvenirError::EntryNotFound(id.to_string()))
}
