//! Capture screen façade
//!
//! Composition root for the capture screen: wires the capability into the
//! session manager, the mode gate, the handoff slot, and the interrupt
//! handler, and exposes the operations the UI layer calls.

use crate::capture::MediaCapability;
use crate::error::CaptureResult;
use crate::lifecycle::{LifecycleInterruptHandler, NavigationDecision, NavigationIntent};
use crate::session::{
    CaptureConfig, CaptureMode, CaptureModeController, CapsulePayload, MediaArtifact,
    MediaResultHandoff, RecordingSessionManager, RecordingState, SessionSnapshot,
};
use std::sync::Arc;

/// What a shutter press did, given the mode and state it landed in.
#[derive(Debug, Clone)]
pub enum ShutterOutcome {
    /// Atomic photo, artifact ready
    Photo(MediaArtifact),
    /// A video/audio session began
    Started(CaptureMode),
    /// The in-flight session was stopped; `None` when the artifact was
    /// already consumed by a racing stop
    Stopped(Option<MediaArtifact>),
}

pub struct CaptureScreen {
    manager: Arc<RecordingSessionManager>,
    modes: CaptureModeController,
    handoff: Arc<MediaResultHandoff>,
    interrupts: Arc<LifecycleInterruptHandler>,
}

impl CaptureScreen {
    pub fn new(capability: Arc<dyn MediaCapability>, config: CaptureConfig) -> Self {
        let handoff = Arc::new(MediaResultHandoff::new());
        let manager = Arc::new(RecordingSessionManager::new(
            capability,
            Arc::clone(&handoff),
            config.clone(),
        ));
        let modes = CaptureModeController::new(
            config.initial_mode,
            manager.watch_state(),
            manager.event_sender(),
        );
        let interrupts = Arc::new(LifecycleInterruptHandler::new(Arc::clone(&manager)));
        Self {
            manager,
            modes,
            handoff,
            interrupts,
        }
    }

    pub fn manager(&self) -> &Arc<RecordingSessionManager> {
        &self.manager
    }

    pub fn handoff(&self) -> &Arc<MediaResultHandoff> {
        &self.handoff
    }

    pub fn interrupts(&self) -> &Arc<LifecycleInterruptHandler> {
        &self.interrupts
    }

    /// The shutter button: stops an active session, otherwise captures a
    /// photo or starts a session depending on the selected mode.
    pub async fn trigger_shutter(&self) -> CaptureResult<ShutterOutcome> {
        if self.manager.state() != RecordingState::Idle {
            let artifact = self.manager.stop_capture().await?;
            return Ok(ShutterOutcome::Stopped(artifact));
        }

        match self.modes.active_mode() {
            CaptureMode::Photo => Ok(ShutterOutcome::Photo(self.manager.capture_photo().await?)),
            mode => {
                self.manager.start_capture(mode).await?;
                Ok(ShutterOutcome::Started(mode))
            }
        }
    }

    /// Switch modality; vetoed with `ModeLocked` during an active session.
    pub fn select_mode(&self, mode: CaptureMode) -> CaptureResult<()> {
        self.modes.select_mode(mode)
    }

    pub fn active_mode(&self) -> CaptureMode {
        self.modes.active_mode()
    }

    /// Settings button; vetoed with a guard message during an active session.
    pub fn open_settings(&self) -> CaptureResult<()> {
        self.interrupts.guard_settings()
    }

    /// Route a navigation attempt through the interrupt handler.
    pub async fn navigate(&self, intent: NavigationIntent) -> NavigationDecision {
        self.interrupts.on_navigation(intent).await
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.manager.snapshot()
    }

    /// Hand the finished artifact to the capsule-creation flow by value.
    pub fn take_for_capsule(&self) -> Option<CapsulePayload> {
        self.handoff.take_for_capsule()
    }
}
