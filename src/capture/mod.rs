//! Media capability abstraction
//!
//! The session manager never touches a device directly; it drives an injected
//! [`MediaCapability`]. Production wires a real camera/microphone backend,
//! tests wire scripted fakes, and [`NullCapability`] is a no-op stand-in.

pub mod stub;

pub use stub::NullCapability;

use crate::error::CaptureResult;
use crate::session::state::{CaptureMode, MediaArtifact};
use async_trait::async_trait;

/// The hardware capability consumed by the session manager.
///
/// Start calls acknowledge once the device is acquired and encoding; stop
/// calls suspend until the backend has finalized the file. Both may fail,
/// and the session manager owns resolving failures back to a safe idle.
#[async_trait]
pub trait MediaCapability: Send + Sync {
    /// Probe whether the device and permissions behind `mode` are usable.
    ///
    /// Checked before any state transition is attempted; a failure here is
    /// surfaced as `HardwareUnavailable`.
    fn availability(&self, mode: CaptureMode) -> CaptureResult<()>;

    /// Take a still photo as a single atomic operation.
    async fn capture_photo(&self) -> CaptureResult<MediaArtifact>;

    /// Acquire the camera and begin video encoding.
    async fn start_video(&self) -> CaptureResult<()>;

    /// Finalize the video file and release the camera.
    async fn stop_video(&self) -> CaptureResult<MediaArtifact>;

    /// Acquire the microphone and begin audio recording.
    async fn start_audio(&self) -> CaptureResult<()>;

    /// Finalize the audio file and release the microphone.
    async fn stop_audio(&self) -> CaptureResult<MediaArtifact>;

    /// Best-effort release after a failed stop. Must not fail.
    async fn force_release(&self);
}
