//! Domain layer - Entry model and capture sessions

pub mod capture;
pub mod entry;

pub use capture::{
    AudioPayload, AudioRecorder, AudioSession, AudioState, CameraPort, LocationPort,
    MicrophonePort, PhotoSession, PhotoState, VideoStream, PHOTO_DATA_URI_PREFIX,
};
pub use entry::{Entry, EntryPatch, GeoPoint, NewEntry};
