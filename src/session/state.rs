//! Capture state management
//!
//! Defines the capture mode, the recording state machine states, and the
//! session/artifact records that flow between the components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Selected capture modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Single still image
    Photo,
    /// Video with audio track
    Video,
    /// Audio only
    Audio,
}

impl Default for CaptureMode {
    fn default() -> Self {
        Self::Photo
    }
}

/// Current state of the recording system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    /// No session in progress
    Idle,
    /// Hardware acquire in flight
    Starting,
    /// Actively recording
    Recording,
    /// Finalize in flight; always resolves to idle
    Stopping,
}

impl Default for RecordingState {
    fn default() -> Self {
        Self::Idle
    }
}

/// One bounded use of the hardware resource.
///
/// Created when a start is accepted, destroyed when the session settles back
/// to idle. At most one exists at any time.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    /// Modality this session was started with; fixed for its lifetime
    pub mode: CaptureMode,

    /// Wall-clock time recording actually began (set on acquire success)
    pub started_at: Option<DateTime<Utc>>,

    /// Monotonic start point for elapsed computation
    begun: Option<Instant>,
}

impl CaptureSession {
    pub fn new(mode: CaptureMode) -> Self {
        Self {
            mode,
            started_at: None,
            begun: None,
        }
    }

    /// Mark the transition into the recording state.
    pub fn mark_recording(&mut self) {
        self.started_at = Some(Utc::now());
        self.begun = Some(Instant::now());
    }

    /// Whole seconds elapsed since recording began, 0 while still starting.
    pub fn elapsed_seconds(&self) -> u64 {
        self.begun.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }
}

/// A finished media file handle plus its type.
///
/// Produced only by a completed stop or an atomic photo capture; ownership
/// transfers to the handoff slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaArtifact {
    /// Artifact ID
    pub id: Uuid,

    /// Opaque handle to the produced file (scheme is backend-defined)
    pub uri: String,

    /// Modality that produced the artifact
    pub media_type: CaptureMode,

    /// Duration in seconds, for video/audio
    pub duration_seconds: Option<u64>,

    /// Size in bytes, if the backend reports it
    pub size_bytes: Option<u64>,
}

impl MediaArtifact {
    pub fn new(media_type: CaptureMode, uri: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            uri: uri.into(),
            media_type,
            duration_seconds: None,
            size_bytes: None,
        }
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.size_bytes = Some(bytes);
        self
    }
}

/// Point-in-time view of the session manager, for the UI layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: RecordingState,
    pub mode: Option<CaptureMode>,
    pub started_at: Option<DateTime<Utc>>,
    pub elapsed_seconds: u64,
}

/// Configuration for the capture screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureConfig {
    /// Modality selected when the screen opens
    pub initial_mode: CaptureMode,

    /// Keep the partial artifact when a stop was forced by an interruption.
    /// Off by default: forced stops discard.
    pub keep_partial_on_forced_stop: bool,

    /// Depth of the session event broadcast channel
    pub event_capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            initial_mode: CaptureMode::Photo,
            keep_partial_on_forced_stop: false,
            event_capacity: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(RecordingState::default(), RecordingState::Idle);
    }

    #[test]
    fn test_session_elapsed_before_recording() {
        let session = CaptureSession::new(CaptureMode::Video);
        assert_eq!(session.elapsed_seconds(), 0);
        assert!(session.started_at.is_none());
    }

    #[test]
    fn test_artifact_builder() {
        let artifact = MediaArtifact::new(CaptureMode::Audio, "file:///tmp/take.m4a")
            .with_duration(12)
            .with_size(48_000);
        assert_eq!(artifact.media_type, CaptureMode::Audio);
        assert_eq!(artifact.duration_seconds, Some(12));
        assert_eq!(artifact.size_bytes, Some(48_000));
    }

    #[test]
    fn test_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordingState::Starting).unwrap(),
            "\"starting\""
        );
        assert_eq!(
            serde_json::to_string(&CaptureMode::Video).unwrap(),
            "\"video\""
        );
    }

    #[test]
    fn test_config_defaults_discard_on_forced_stop() {
        let config = CaptureConfig::default();
        assert!(!config.keep_partial_on_forced_stop);
        assert_eq!(config.event_capacity, 100);
    }
}
