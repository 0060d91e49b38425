//! Device adapters for the capture ports
//!
//! The CLI has no live camera or microphone; a JPEG file stands in for the
//! camera frame buffer and an audio file, delivered in ordered chunks,
//! stands in for the incremental recorder. Coordinates come from the
//! `SOUVENIR_LOCATION` environment variable.

use crate::domain::{AudioRecorder, CameraPort, GeoPoint, LocationPort, MicrophonePort, VideoStream};
use crate::error::{Result, SouvenirError};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable read by [`EnvLocation`], as `"lat,lon"`.
pub const LOCATION_ENV_VAR: &str = "SOUVENIR_LOCATION";

const AUDIO_CHUNK_SIZE: usize = 64 * 1024;

fn capability_error(e: std::io::Error, what: &str, path: &Path) -> SouvenirError {
    match e.kind() {
        std::io::ErrorKind::NotFound => {
            SouvenirError::DeviceUnavailable(format!("{}: {}", what, path.display()))
        }
        std::io::ErrorKind::PermissionDenied => {
            SouvenirError::PermissionDenied(format!("{}: {}", what, path.display()))
        }
        _ => SouvenirError::Io(e),
    }
}

/// Camera capability backed by a JPEG file.
#[derive(Debug, Clone)]
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: PathBuf) -> Self {
        FileCamera { path }
    }
}

impl CameraPort for FileCamera {
    fn acquire(&self) -> Result<Box<dyn VideoStream>> {
        let frame = fs::read(&self.path)
            .map_err(|e| capability_error(e, "cannot open camera source", &self.path))?;
        Ok(Box::new(FileVideoStream {
            frame: Some(frame),
        }))
    }
}

struct FileVideoStream {
    frame: Option<Vec<u8>>,
}

impl VideoStream for FileVideoStream {
    fn grab_frame(&mut self) -> Result<Vec<u8>> {
        match &self.frame {
            Some(frame) => Ok(frame.clone()),
            None => Err(SouvenirError::Capture(
                "video stream already released".to_string(),
            )),
        }
    }

    fn release(&mut self) {
        self.frame = None;
    }
}

/// Microphone capability backed by an audio file.
#[derive(Debug, Clone)]
pub struct FileMicrophone {
    path: PathBuf,
}

impl FileMicrophone {
    pub fn new(path: PathBuf) -> Self {
        FileMicrophone { path }
    }
}

impl MicrophonePort for FileMicrophone {
    fn acquire(&self) -> Result<Box<dyn AudioRecorder>> {
        let data = fs::read(&self.path)
            .map_err(|e| capability_error(e, "cannot open microphone source", &self.path))?;
        Ok(Box::new(FileRecorder { data, pos: 0 }))
    }
}

struct FileRecorder {
    data: Vec<u8>,
    pos: usize,
}

impl AudioRecorder for FileRecorder {
    fn poll_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }
        let end = (self.pos + AUDIO_CHUNK_SIZE).min(self.data.len());
        let chunk = self.data[self.pos..end].to_vec();
        self.pos = end;
        Ok(Some(chunk))
    }

    fn release(&mut self) {
        self.data.clear();
        self.pos = 0;
    }
}

/// Location probe reading coordinates from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvLocation {
    var: String,
}

impl EnvLocation {
    pub fn new() -> Self {
        EnvLocation {
            var: LOCATION_ENV_VAR.to_string(),
        }
    }

    /// Read from a different variable; used by tests to avoid racing on the
    /// process environment.
    pub fn from_var(var: &str) -> Self {
        EnvLocation {
            var: var.to_string(),
        }
    }

    fn parse(value: &str) -> Option<GeoPoint> {
        let (lat, lon) = value.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lon: f64 = lon.trim().parse().ok()?;
        Some(GeoPoint::new(lat, lon))
    }
}

impl Default for EnvLocation {
    fn default() -> Self {
        EnvLocation::new()
    }
}

impl LocationPort for EnvLocation {
    fn current_position(&self) -> Result<GeoPoint> {
        let raw = std::env::var(&self.var).map_err(|_| {
            SouvenirError::PositionUnavailable(format!("{} is not set", self.var))
        })?;
        Self::parse(&raw).ok_or_else(|| {
            SouvenirError::PositionUnavailable(format!(
                "{} must be \"lat,lon\", got '{}'",
                self.var, raw
            ))
        })
    }
}
