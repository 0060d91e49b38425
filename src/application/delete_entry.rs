//! Delete entry use case

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Delete an entry by id. Unknown ids are a benign no-op, so deleting twice
/// ends in the same state as deleting once.
pub fn delete_entry(repository: &FileSystemRepository, id: &str) -> Result<()> {
    repository.entry_store()?.delete_entry(id)
}
