//! Application layer - Use cases and orchestration

pub mod compose;
pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod show_entry;

pub use compose::EntryComposer;
pub use delete_entry::delete_entry;
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use show_entry::show_entry;
