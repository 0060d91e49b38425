//! Compose entry use case

use crate::domain::{
    AudioPayload, AudioSession, CameraPort, Entry, GeoPoint, LocationPort, MicrophonePort,
    NewEntry, PhotoSession,
};
use crate::error::{Result, SouvenirError};
use crate::infrastructure::slot::StorageSlot;
use crate::infrastructure::EntryStore;

/// Transient holder of an entry's fields while the user is constructing it.
///
/// Each capture collaborator writes into exactly one field. Nothing touches
/// the store until `submit`, and a failed submit preserves every field so
/// the user can correct and retry.
#[derive(Default)]
pub struct EntryComposer {
    title: String,
    content: String,
    location: Option<GeoPoint>,
    photo: Option<String>,
    voice: Option<AudioPayload>,
}

impl EntryComposer {
    pub fn new() -> Self {
        EntryComposer::default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// One-shot geolocation probe. On failure the composer retains no
    /// location; the caller may retry or proceed without one.
    pub fn detect_location(&mut self, probe: &dyn LocationPort) -> Result<GeoPoint> {
        let point = probe.current_position()?;
        self.location = Some(point);
        Ok(point)
    }

    /// Run a full photo session against the camera: acquire, grab one frame,
    /// release. The encoded payload lands in the photo field.
    pub fn take_photo(&mut self, camera: &dyn CameraPort) -> Result<()> {
        let mut session = PhotoSession::new();
        session.start(camera)?;
        session.capture()?;
        self.photo = session.take_payload();
        Ok(())
    }

    /// Run a full audio session against the microphone: acquire, record to
    /// exhaustion, finalize. The payload is kept only for this composition;
    /// the persisted entry records just the voice flag.
    pub fn record_voice(&mut self, microphone: &dyn MicrophonePort) -> Result<()> {
        let mut session = AudioSession::new();
        session.start(microphone)?;
        let payload = session.stop()?;
        self.voice = Some(payload.clone());
        Ok(())
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// The finalized voice memo, available until the composer is dropped.
    pub fn voice(&self) -> Option<&AudioPayload> {
        self.voice.as_ref()
    }

    pub fn discard_photo(&mut self) {
        self.photo = None;
    }

    pub fn discard_voice(&mut self) {
        self.voice = None;
    }

    /// Validate and persist the accumulated fields as a new entry.
    ///
    /// An empty (or whitespace-only) title fails validation before any store
    /// call is made.
    pub fn submit<S: StorageSlot>(&self, store: &EntryStore<S>) -> Result<Entry> {
        if self.title.trim().is_empty() {
            return Err(SouvenirError::Validation(
                "Give your adventure a name: title must not be empty".to_string(),
            ));
        }

        store.create_entry(NewEntry {
            title: self.title.clone(),
            content: self.content.clone(),
            location: self.location,
            photo: self.photo.clone(),
            has_voice: self.voice.is_some(),
        })
    }
}
