//! Journal entry data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A WGS84 coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// One persisted journal entry.
///
/// Serialized field names follow the stored JSON format (`hasVoice`,
/// `createdAt`); `created_at` round-trips as an RFC3339 timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Captured photo as a `data:image/jpeg;base64,` data URI
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub has_voice: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the composer when creating an entry.
/// `id` and `created_at` are stamped by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    pub location: Option<GeoPoint>,
    pub photo: Option<String>,
    pub has_voice: bool,
}

/// Partial update for an existing entry; unset fields are left untouched.
/// `id` and `created_at` are assigned once at creation and never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub location: Option<GeoPoint>,
    pub photo: Option<String>,
    pub has_voice: Option<bool>,
}

impl Entry {
    /// Stamp a new entry from composer fields: fresh random id, creation
    /// timestamp assigned once.
    pub fn stamp(new: NewEntry) -> Self {
        Entry {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            content: new.content,
            location: new.location,
            photo: new.photo,
            has_voice: new.has_voice,
            created_at: Utc::now(),
        }
    }

    /// Shallow merge of patch fields over this entry.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(photo) = patch.photo {
            self.photo = Some(photo);
        }
        if let Some(has_voice) = patch.has_voice {
            self.has_voice = has_voice;
        }
    }
}
