//! Infrastructure layer - Persistence, configuration and device adapters

pub mod capture;
pub mod config;
pub mod repository;
pub mod slot;
pub mod store;

pub use capture::{EnvLocation, FileCamera, FileMicrophone, LOCATION_ENV_VAR};
pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use slot::{FileSlot, MemorySlot, StorageSlot};
pub use store::EntryStore;
