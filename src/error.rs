//! Error types for souvenir

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the souvenir application
#[derive(Debug, Error)]
pub enum SouvenirError {
    #[error("Not a souvenir journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SouvenirError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SouvenirError::NotJournalDirectory(_) => 2,
            SouvenirError::Validation(_) => 3,
            SouvenirError::EntryNotFound(_) => 4,
            SouvenirError::PermissionDenied(_)
            | SouvenirError::DeviceUnavailable(_)
            | SouvenirError::PositionUnavailable(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SouvenirError::NotJournalDirectory(path) => {
                format!(
                    "Not a souvenir journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'souvenir init' in this directory to create a new journal\n\
                    • Navigate to an existing souvenir directory\n\
                    • Set SOUVENIR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            SouvenirError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Give your adventure a name: souvenir new --title \"Beach Day\"\n\
                    • Nothing you already captured was lost; re-run with a title",
                    msg
                )
            }
            SouvenirError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'souvenir list' to see stored entries and their ids\n\
                    • Ids are assigned at creation and shown in the list output",
                    id
                )
            }
            SouvenirError::PermissionDenied(msg) => {
                format!(
                    "Permission denied: {}\n\n\
                    Suggestions:\n\
                    • Check file permissions on the capture source\n\
                    • Re-run after granting access; nothing is retried automatically",
                    msg
                )
            }
            SouvenirError::DeviceUnavailable(msg) => {
                format!(
                    "Device unavailable: {}\n\n\
                    Suggestions:\n\
                    • Check that the capture source path exists\n\
                    • Omit the flag to save the entry without that attachment",
                    msg
                )
            }
            SouvenirError::PositionUnavailable(msg) => {
                format!(
                    "Position unavailable: {}\n\n\
                    Suggestions:\n\
                    • Set SOUVENIR_LOCATION to \"lat,lon\" (e.g. \"10.1234,20.5678\")\n\
                    • Omit --locate to save the entry without coordinates",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SouvenirError
pub type Result<T> = std::result::Result<T, SouvenirError>;
