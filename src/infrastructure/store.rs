//! Entry store over a storage slot

use crate::domain::{Entry, EntryPatch, NewEntry};
use crate::error::Result;
use crate::infrastructure::slot::StorageSlot;

/// CRUD over the entry collection, backed by a single injected slot.
///
/// Every mutation rewrites the whole serialized collection (read-modify-write
/// over one value). This is safe within a single process; concurrent writers
/// to the same slot can lose each other's last write.
pub struct EntryStore<S: StorageSlot> {
    slot: S,
}

impl<S: StorageSlot> EntryStore<S> {
    pub fn new(slot: S) -> Self {
        EntryStore { slot }
    }

    /// All entries in stored order, newest first.
    ///
    /// An absent slot, an unreadable slot, or corrupt contents all degrade to
    /// an empty collection; malformed stored data is treated as absent, not
    /// repaired and never fatal.
    pub fn list_entries(&self) -> Vec<Entry> {
        let Ok(Some(raw)) = self.slot.read() else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Stamp and persist a new entry, prepending it to the collection.
    pub fn create_entry(&self, new: NewEntry) -> Result<Entry> {
        let entry = Entry::stamp(new);
        let mut entries = self.list_entries();
        entries.insert(0, entry.clone());
        self.persist(&entries)?;
        Ok(entry)
    }

    /// Shallow-merge `patch` over the entry with the given id.
    /// No-op when the id is unknown.
    pub fn update_entry(&self, id: &str, patch: EntryPatch) -> Result<()> {
        let mut entries = self.list_entries();
        match entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.apply(patch),
            None => return Ok(()),
        }
        self.persist(&entries)
    }

    /// Remove the entry with the given id. No-op (and idempotent) when the
    /// id is unknown.
    pub fn delete_entry(&self, id: &str) -> Result<()> {
        let mut entries = self.list_entries();
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(());
        }
        self.persist(&entries)
    }

    /// Linear scan for one entry.
    pub fn get_entry(&self, id: &str) -> Option<Entry> {
        self.list_entries().into_iter().find(|e| e.id == id)
    }

    fn persist(&self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.slot.write(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use crate::infrastructure::slot::MemorySlot;

    fn store() -> EntryStore<MemorySlot> {
        EntryStore::new(MemorySlot::new())
    }

    fn draft(title: &str) -> NewEntry {
        NewEntry {
            title: title.to_string(),
            content: String::new(),
            ..NewEntry::default()
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(store().list_entries().is_empty());
    }

    #[test]
    fn test_create_prepends_newest_first() {
        let store = store();
        store.create_entry(draft("first")).unwrap();
        store.create_entry(draft("second")).unwrap();
        store.create_entry(draft("third")).unwrap();

        let entries = store.list_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "third");
        assert_eq!(entries[1].title, "second");
        assert_eq!(entries[2].title, "first");
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let store = store();
        for i in 0..10 {
            store.create_entry(draft(&format!("entry {i}"))).unwrap();
        }

        let entries = store.list_entries();
        assert_eq!(entries.len(), 10);
        let mut ids: Vec<_> = entries.iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let store = store();
        let created = store
            .create_entry(NewEntry {
                title: "Beach Day".to_string(),
                content: "Sun.".to_string(),
                location: Some(GeoPoint::new(10.1234, 20.5678)),
                photo: None,
                has_voice: true,
            })
            .unwrap();

        let fetched = store.get_entry(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.location, Some(GeoPoint::new(10.1234, 20.5678)));
        assert!(fetched.has_voice);
    }

    #[test]
    fn test_update_changes_only_named_field() {
        let store = store();
        let created = store
            .create_entry(NewEntry {
                title: "Beach Day".to_string(),
                content: "Sun.".to_string(),
                location: Some(GeoPoint::new(1.0, 2.0)),
                photo: None,
                has_voice: false,
            })
            .unwrap();

        store
            .update_entry(
                &created.id,
                EntryPatch {
                    title: Some("Cliff Walk".to_string()),
                    ..EntryPatch::default()
                },
            )
            .unwrap();

        let updated = store.get_entry(&created.id).unwrap();
        assert_eq!(updated.title, "Cliff Walk");
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.location, created.location);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = store();
        store.create_entry(draft("only")).unwrap();

        store
            .update_entry(
                "missing",
                EntryPatch {
                    title: Some("x".to_string()),
                    ..EntryPatch::default()
                },
            )
            .unwrap();

        assert_eq!(store.list_entries()[0].title, "only");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = store();
        let keep = store.create_entry(draft("keep")).unwrap();
        let gone = store.create_entry(draft("gone")).unwrap();

        store.delete_entry(&gone.id).unwrap();

        assert_eq!(store.get_entry(&gone.id), None);
        let entries = store.list_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, keep.id);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = store();
        let entry = store.create_entry(draft("once")).unwrap();

        store.delete_entry(&entry.id).unwrap();
        store.delete_entry(&entry.id).unwrap();

        assert!(store.list_entries().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = store();
        store.create_entry(draft("only")).unwrap();

        store.delete_entry("missing").unwrap();
        assert_eq!(store.list_entries().len(), 1);
    }

    #[test]
    fn test_corrupt_slot_reads_as_empty() {
        let store = EntryStore::new(MemorySlot::with_value("not json {"));
        assert!(store.list_entries().is_empty());
    }

    #[test]
    fn test_create_over_corrupt_slot_rewrites_valid_collection() {
        let store = EntryStore::new(MemorySlot::with_value("not json {"));
        store.create_entry(draft("fresh")).unwrap();

        let entries = store.list_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "fresh");
    }
}
