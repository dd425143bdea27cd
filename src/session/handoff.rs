//! Media result handoff
//!
//! Holds the most recently produced artifact and hands it to the downstream
//! capsule-creation flow by value. Replaces the shared mutable context the
//! outer app used to read finished captures from.

use crate::session::state::{CaptureMode, MediaArtifact};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// The by-value shape the capsule-creation flow receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsulePayload {
    pub uri: String,
    pub media_type: CaptureMode,
}

/// Single-slot holder for the last finished capture.
#[derive(Debug, Default)]
pub struct MediaResultHandoff {
    slot: Mutex<Option<MediaArtifact>>,
}

impl MediaResultHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a finished artifact, replacing any previous one.
    pub fn deposit(&self, artifact: MediaArtifact) {
        tracing::debug!(uri = %artifact.uri, "artifact deposited for handoff");
        *self.slot.lock() = Some(artifact);
    }

    /// The artifact produced by the last successful stop or photo, if any.
    pub fn current_artifact(&self) -> Option<MediaArtifact> {
        self.slot.lock().clone()
    }

    /// Discard the held artifact ("retake"). Does not touch session state.
    pub fn clear(&self) {
        if self.slot.lock().take().is_some() {
            tracing::debug!("handoff slot cleared");
        }
    }

    /// Hand the artifact to the capsule-creation flow.
    ///
    /// Empties the slot so the capture side retains no reference afterwards.
    pub fn take_for_capsule(&self) -> Option<CapsulePayload> {
        self.slot.lock().take().map(|artifact| CapsulePayload {
            uri: artifact.uri,
            media_type: artifact.media_type,
        })
    }
}
