//! Single-slot key-value storage

use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// One string-keyed storage slot holding the whole serialized collection.
/// An absent value is equivalent to an empty collection.
///
/// The slot is injected into the store so tests can substitute an in-memory
/// fake while the CLI uses a file under the journal directory.
pub trait StorageSlot {
    /// Read the slot value, `None` when the slot has never been written.
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot value in full.
    fn write(&self, value: &str) -> Result<()>;
}

/// File-backed slot: one file under the journal's `.souvenir` directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        FileSlot { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// In-memory slot for tests; same contract as `FileSlot`.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }

    /// Pre-seed the slot, e.g. with corrupt contents.
    pub fn with_value(value: &str) -> Self {
        MemorySlot {
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        match self.value.lock() {
            Ok(guard) => Ok(guard.clone()),
            Err(poisoned) => Ok(poisoned.into_inner().clone()),
        }
    }

    fn write(&self, value: &str) -> Result<()> {
        match self.value.lock() {
            Ok(mut guard) => *guard = Some(value.to_string()),
            Err(poisoned) => *poisoned.into_inner() = Some(value.to_string()),
        }
        Ok(())
    }
}
