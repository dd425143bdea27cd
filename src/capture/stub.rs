//! No-op capability implementation
//!
//! Substitutable at composition time when no real backend is present, and a
//! convenient baseline for tests and demos. Every operation succeeds and
//! mints placeholder artifacts under the `null://` scheme.

use crate::error::CaptureResult;
use crate::session::state::{CaptureMode, MediaArtifact};
use async_trait::async_trait;

use super::MediaCapability;

/// A capability with no device behind it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCapability;

#[async_trait]
impl MediaCapability for NullCapability {
    fn availability(&self, _mode: CaptureMode) -> CaptureResult<()> {
        Ok(())
    }

    async fn capture_photo(&self) -> CaptureResult<MediaArtifact> {
        Ok(MediaArtifact::new(CaptureMode::Photo, "null://photo"))
    }

    async fn start_video(&self) -> CaptureResult<()> {
        Ok(())
    }

    async fn stop_video(&self) -> CaptureResult<MediaArtifact> {
        Ok(MediaArtifact::new(CaptureMode::Video, "null://video"))
    }

    async fn start_audio(&self) -> CaptureResult<()> {
        Ok(())
    }

    async fn stop_audio(&self) -> CaptureResult<MediaArtifact> {
        Ok(MediaArtifact::new(CaptureMode::Audio, "null://audio"))
    }

    async fn force_release(&self) {}
}
