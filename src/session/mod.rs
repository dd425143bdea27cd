//! Capture session module
//!
//! - Session state, config, and artifact records
//! - `RecordingSessionManager`, the state machine owning the hardware
//! - `CaptureModeController`, the mode gate
//! - `MediaResultHandoff`, the downstream artifact slot

pub mod handoff;
pub mod manager;
pub mod mode;
pub mod state;

pub use handoff::{CapsulePayload, MediaResultHandoff};
pub use manager::{RecordingSessionManager, SessionEvent};
pub use mode::CaptureModeController;
pub use state::{
    CaptureConfig, CaptureMode, CaptureSession, MediaArtifact, RecordingState, SessionSnapshot,
};
