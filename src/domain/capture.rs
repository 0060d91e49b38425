//! Capture ports and session state machines
//!
//! Hardware capabilities (camera, microphone, location sensor) are reached
//! through port traits so the composer never touches a device directly.
//! Sessions own the acquired stream for their whole lifecycle: acquired on
//! `start`, always released on capture, stop, reset, or drop.

use crate::domain::GeoPoint;
use crate::error::{Result, SouvenirError};
use base64::engine::general_purpose::STANDARD as B64_ENGINE;
use base64::Engine;

/// One-shot camera capability.
pub trait CameraPort {
    /// Acquire a video stream, preferring the rear-facing device where the
    /// platform distinguishes. Fails with `PermissionDenied` or
    /// `DeviceUnavailable`.
    fn acquire(&self) -> Result<Box<dyn VideoStream>>;
}

/// A live video stream from which single frames can be grabbed.
pub trait VideoStream {
    /// Render the current frame into a still JPEG buffer.
    fn grab_frame(&mut self) -> Result<Vec<u8>>;

    /// Release the underlying device. Must be safe to call more than once.
    fn release(&mut self);
}

/// One-shot microphone capability.
pub trait MicrophonePort {
    fn acquire(&self) -> Result<Box<dyn AudioRecorder>>;
}

/// An incremental audio recorder delivering encoded chunks in order.
pub trait AudioRecorder {
    /// Next chunk the recorder has encoded, or `None` once the recording
    /// source is exhausted. Chunks arrive in delivery order.
    fn poll_chunk(&mut self) -> Result<Option<Vec<u8>>>;

    /// Release the underlying device. Must be safe to call more than once.
    fn release(&mut self);
}

/// One-shot location probe.
pub trait LocationPort {
    /// Current device coordinates. Fails with `PermissionDenied` or
    /// `PositionUnavailable`; the caller retains no location on failure.
    fn current_position(&self) -> Result<GeoPoint>;
}

/// Prefix of every encoded photo payload.
pub const PHOTO_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// A finalized voice memo. The payload lives only for the composing
/// session; the persisted entry records just a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    /// Container label, not a codec guarantee.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Photo capture lifecycle: `Idle -> Streaming -> Captured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoState {
    Idle,
    Streaming,
    Captured,
}

/// A camera session producing a single still image as a JPEG data URI.
///
/// `Captured` is terminal for the session; `discard` returns to `Idle` and a
/// fresh `start` is required to retake.
#[derive(Default)]
pub struct PhotoSession {
    stream: Option<Box<dyn VideoStream>>,
    payload: Option<String>,
}

impl PhotoSession {
    pub fn new() -> Self {
        PhotoSession::default()
    }

    pub fn state(&self) -> PhotoState {
        if self.stream.is_some() {
            PhotoState::Streaming
        } else if self.payload.is_some() {
            PhotoState::Captured
        } else {
            PhotoState::Idle
        }
    }

    /// Acquire the camera and begin streaming. On failure the session stays
    /// in `Idle` and the capability error is returned to the caller.
    pub fn start(&mut self, camera: &dyn CameraPort) -> Result<()> {
        if self.state() != PhotoState::Idle {
            return Err(SouvenirError::Capture(
                "photo session already started".to_string(),
            ));
        }
        self.stream = Some(camera.acquire()?);
        Ok(())
    }

    /// Grab the current frame, encode it as a data URI, and release the
    /// camera. Valid only while streaming.
    pub fn capture(&mut self) -> Result<&str> {
        let Some(mut stream) = self.stream.take() else {
            return Err(SouvenirError::Capture(
                "no active camera stream".to_string(),
            ));
        };
        let frame = match stream.grab_frame() {
            Ok(frame) => frame,
            Err(e) => {
                stream.release();
                return Err(e);
            }
        };
        stream.release();
        let uri = format!("{}{}", PHOTO_DATA_URI_PREFIX, B64_ENGINE.encode(frame));
        Ok(self.payload.insert(uri).as_str())
    }

    /// Drop the captured payload (or abandon a live stream) and return to
    /// `Idle` without re-acquiring the camera.
    pub fn discard(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
        self.payload = None;
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Hand the payload to the composer, leaving the session `Idle`.
    pub fn take_payload(&mut self) -> Option<String> {
        self.payload.take()
    }
}

impl Drop for PhotoSession {
    fn drop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
    }
}

/// Audio capture lifecycle: `Idle -> Recording -> Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioState {
    Idle,
    Recording,
    Stopped,
}

/// A microphone session accumulating encoded chunks into one voice memo.
///
/// Chunks append in delivery order and are concatenated exactly once, at
/// `stop`. There is no auto-finalize: a recording that is never stopped
/// produces no payload.
#[derive(Default)]
pub struct AudioSession {
    recorder: Option<Box<dyn AudioRecorder>>,
    chunks: Vec<Vec<u8>>,
    payload: Option<AudioPayload>,
}

impl AudioSession {
    pub fn new() -> Self {
        AudioSession::default()
    }

    pub fn state(&self) -> AudioState {
        if self.recorder.is_some() {
            AudioState::Recording
        } else if self.payload.is_some() {
            AudioState::Stopped
        } else {
            AudioState::Idle
        }
    }

    /// Acquire the microphone and begin recording. Any buffer left over from
    /// a prior session is cleared first.
    pub fn start(&mut self, microphone: &dyn MicrophonePort) -> Result<()> {
        if self.state() == AudioState::Recording {
            return Err(SouvenirError::Capture(
                "audio session already recording".to_string(),
            ));
        }
        self.chunks.clear();
        self.payload = None;
        self.recorder = Some(microphone.acquire()?);
        Ok(())
    }

    /// Pull chunks the recorder has delivered so far into the buffer.
    pub fn pump(&mut self) -> Result<()> {
        let Some(recorder) = self.recorder.as_mut() else {
            return Err(SouvenirError::Capture("not recording".to_string()));
        };
        while let Some(chunk) = recorder.poll_chunk()? {
            self.chunks.push(chunk);
        }
        Ok(())
    }

    /// Finalize the recording: drain remaining chunks, concatenate them into
    /// a single payload, and release the microphone. Valid only while
    /// recording.
    pub fn stop(&mut self) -> Result<&AudioPayload> {
        let Some(mut recorder) = self.recorder.take() else {
            return Err(SouvenirError::Capture("not recording".to_string()));
        };
        loop {
            match recorder.poll_chunk() {
                Ok(Some(chunk)) => self.chunks.push(chunk),
                Ok(None) => break,
                Err(e) => {
                    recorder.release();
                    return Err(e);
                }
            }
        }
        recorder.release();
        let payload = AudioPayload {
            mime: "audio/mp3".to_string(),
            bytes: self.chunks.concat(),
        };
        self.chunks.clear();
        Ok(self.payload.insert(payload))
    }

    /// Clear buffer and payload, returning to `Idle`.
    pub fn reset(&mut self) {
        if let Some(mut recorder) = self.recorder.take() {
            recorder.release();
        }
        self.chunks.clear();
        self.payload = None;
    }

    pub fn payload(&self) -> Option<&AudioPayload> {
        self.payload.as_ref()
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        if let Some(mut recorder) = self.recorder.take() {
            recorder.release();
        }
    }
}
