//! Recording session manager
//!
//! Owns exclusive access to the media hardware and drives it through the
//! bounded state machine `Idle -> Starting -> Recording -> Stopping -> Idle`.
//! Every transition goes through a compare-and-set gate on the current state,
//! so a racing user stop and interrupt-forced stop collapse into a single
//! hardware stop call.

use crate::capture::MediaCapability;
use crate::error::{CaptureError, CaptureResult};
use crate::session::handoff::MediaResultHandoff;
use crate::session::state::{
    CaptureConfig, CaptureMode, CaptureSession, MediaArtifact, RecordingState, SessionSnapshot,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// Events emitted while a session runs
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Hardware acquire in flight
    Starting(CaptureMode),
    /// Acquire succeeded, now recording
    Started(CaptureMode),
    /// Session settled back to idle
    Stopped { forced: bool },
    /// Acquire failed; nothing is held
    StartFailed(String),
    /// Finalize failed; no artifact
    StopFailed(String),
    /// Atomic photo completed
    PhotoCaptured,
    /// Selected modality changed
    ModeChanged(CaptureMode),
}

fn unavailable(e: CaptureError) -> CaptureError {
    match e {
        e @ CaptureError::HardwareUnavailable(_) => e,
        other => CaptureError::HardwareUnavailable(other.to_string()),
    }
}

fn start_failure(e: CaptureError) -> CaptureError {
    match e {
        e @ CaptureError::StartFailed(_) => e,
        other => CaptureError::StartFailed(other.to_string()),
    }
}

fn stop_failure(e: CaptureError) -> CaptureError {
    match e {
        e @ CaptureError::StopFailed(_) => e,
        other => CaptureError::StopFailed(other.to_string()),
    }
}

/// The state machine owning exclusive hardware access.
///
/// Shared behind an `Arc`; all methods take `&self` so user-initiated calls
/// and interrupt-initiated calls can race safely.
pub struct RecordingSessionManager {
    /// Injected hardware capability
    capability: Arc<dyn MediaCapability>,

    /// Screen configuration
    config: CaptureConfig,

    /// Current state; waiters observe settlement through the watch channel
    state_tx: watch::Sender<RecordingState>,

    /// Metadata for the session currently in flight, if any
    session: Mutex<Option<CaptureSession>>,

    /// Destination slot for finished artifacts
    handoff: Arc<MediaResultHandoff>,

    /// Event broadcaster
    event_tx: broadcast::Sender<SessionEvent>,
}

impl RecordingSessionManager {
    pub fn new(
        capability: Arc<dyn MediaCapability>,
        handoff: Arc<MediaResultHandoff>,
        config: CaptureConfig,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_capacity.max(1));
        let (state_tx, _) = watch::channel(RecordingState::Idle);
        Self {
            capability,
            config,
            state_tx,
            session: Mutex::new(None),
            handoff,
            event_tx,
        }
    }

    /// Get the current recording state
    pub fn state(&self) -> RecordingState {
        *self.state_tx.borrow()
    }

    /// Observe state changes
    pub fn watch_state(&self) -> watch::Receiver<RecordingState> {
        self.state_tx.subscribe()
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    pub(crate) fn event_sender(&self) -> broadcast::Sender<SessionEvent> {
        self.event_tx.clone()
    }

    /// Whole seconds recorded so far in the in-flight session
    pub fn elapsed_seconds(&self) -> u64 {
        self.session
            .lock()
            .as_ref()
            .map(|s| s.elapsed_seconds())
            .unwrap_or(0)
    }

    /// Point-in-time view for the UI layer
    pub fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.lock();
        SessionSnapshot {
            state: self.state(),
            mode: session.as_ref().map(|s| s.mode),
            started_at: session.as_ref().and_then(|s| s.started_at),
            elapsed_seconds: session.as_ref().map(|s| s.elapsed_seconds()).unwrap_or(0),
        }
    }

    /// Apply `from -> to` only if the actual current state is `from`.
    fn transition(&self, from: RecordingState, to: RecordingState) -> bool {
        self.state_tx.send_if_modified(|state| {
            if *state == from {
                *state = to;
                true
            } else {
                false
            }
        })
    }

    /// Start a video or audio capture session.
    ///
    /// Fails with `AlreadyActive` when a session is in flight, leaving it
    /// untouched. Photo mode has no bounded session; use
    /// [`capture_photo`](Self::capture_photo).
    pub async fn start_capture(&self, mode: CaptureMode) -> CaptureResult<()> {
        self.capability.availability(mode).map_err(unavailable)?;

        if mode == CaptureMode::Photo {
            return Err(CaptureError::guard(
                "photo capture is instantaneous; press the shutter instead",
            ));
        }

        if !self.transition(RecordingState::Idle, RecordingState::Starting) {
            return Err(CaptureError::AlreadyActive);
        }

        *self.session.lock() = Some(CaptureSession::new(mode));
        let _ = self.event_tx.send(SessionEvent::Starting(mode));
        tracing::info!(?mode, "starting capture");

        let acquired = match mode {
            CaptureMode::Video => self.capability.start_video().await,
            CaptureMode::Audio => self.capability.start_audio().await,
            CaptureMode::Photo => unreachable!("guarded above"),
        };

        match acquired {
            Ok(()) => {
                // Only this task can move the state out of Starting; stop
                // requests arriving meanwhile wait on the watch channel.
                self.transition(RecordingState::Starting, RecordingState::Recording);
                if let Some(session) = self.session.lock().as_mut() {
                    session.mark_recording();
                }
                let _ = self.event_tx.send(SessionEvent::Started(mode));
                tracing::info!(?mode, "capture started");
                Ok(())
            }
            Err(e) => {
                self.session.lock().take();
                self.transition(RecordingState::Starting, RecordingState::Idle);
                let err = start_failure(e);
                let _ = self.event_tx.send(SessionEvent::StartFailed(err.to_string()));
                tracing::warn!(?mode, error = %err, "capture failed to start");
                Err(err)
            }
        }
    }

    /// Take a still photo as a single atomic operation.
    ///
    /// Valid only while idle; the state stays idle throughout and the
    /// artifact is deposited into the handoff slot on completion.
    pub async fn capture_photo(&self) -> CaptureResult<MediaArtifact> {
        self.capability
            .availability(CaptureMode::Photo)
            .map_err(unavailable)?;

        if self.state() != RecordingState::Idle {
            return Err(CaptureError::AlreadyActive);
        }

        let mut artifact = self
            .capability
            .capture_photo()
            .await
            .map_err(start_failure)?;
        artifact.media_type = CaptureMode::Photo;

        self.handoff.deposit(artifact.clone());
        let _ = self.event_tx.send(SessionEvent::PhotoCaptured);
        tracing::info!(uri = %artifact.uri, "photo captured");
        Ok(artifact)
    }

    /// Stop the in-flight capture session.
    ///
    /// Idempotent: while idle this is a no-op, while another stop is already
    /// finalizing this waits for it to settle without issuing a second
    /// hardware stop. A stop requested while still starting is deferred until
    /// the pending start resolves, then honored immediately.
    pub async fn stop_capture(&self) -> CaptureResult<Option<MediaArtifact>> {
        self.stop_internal(false).await
    }

    /// Interrupt-initiated stop.
    ///
    /// Swallows hardware failures into the forced-idle guarantee and, unless
    /// configured otherwise, discards the partial artifact. Returns whether a
    /// session was actually interrupted.
    pub async fn force_stop(&self) -> bool {
        if self.state() == RecordingState::Idle {
            return false;
        }
        match self.stop_internal(true).await {
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "forced stop resolved with failure"),
        }
        true
    }

    async fn stop_internal(&self, forced: bool) -> CaptureResult<Option<MediaArtifact>> {
        let mut state_rx = self.state_tx.subscribe();
        loop {
            let current = *state_rx.borrow_and_update();
            match current {
                RecordingState::Idle => return Ok(None),
                RecordingState::Stopping => {
                    // A stop is already finalizing; wait for it to settle.
                    while *state_rx.borrow_and_update() != RecordingState::Idle {
                        if state_rx.changed().await.is_err() {
                            return Ok(None);
                        }
                    }
                    return Ok(None);
                }
                RecordingState::Starting => {
                    // Deferred until the pending start resolves.
                    if state_rx.changed().await.is_err() {
                        return Ok(None);
                    }
                }
                RecordingState::Recording => {
                    if !self.transition(RecordingState::Recording, RecordingState::Stopping) {
                        continue;
                    }
                    return self.finalize_stop(forced).await;
                }
            }
        }
    }

    /// Runs with the Stopping state won through the compare-and-set gate;
    /// always resolves to Idle.
    async fn finalize_stop(&self, forced: bool) -> CaptureResult<Option<MediaArtifact>> {
        let mode = self.session.lock().as_ref().map(|s| s.mode);
        let Some(mode) = mode else {
            self.transition(RecordingState::Stopping, RecordingState::Idle);
            return Ok(None);
        };
        tracing::info!(?mode, forced, "stopping capture");

        let stopped = match mode {
            CaptureMode::Video => self.capability.stop_video().await,
            CaptureMode::Audio => self.capability.stop_audio().await,
            CaptureMode::Photo => unreachable!("photo never enters a bounded session"),
        };

        match stopped {
            Ok(mut artifact) => {
                let elapsed = self
                    .session
                    .lock()
                    .take()
                    .map(|s| s.elapsed_seconds())
                    .unwrap_or(0);
                artifact.duration_seconds.get_or_insert(elapsed);
                self.transition(RecordingState::Stopping, RecordingState::Idle);

                let keep = !forced || self.config.keep_partial_on_forced_stop;
                if keep {
                    self.handoff.deposit(artifact.clone());
                } else {
                    tracing::info!(uri = %artifact.uri, "discarding artifact from forced stop");
                }
                let _ = self.event_tx.send(SessionEvent::Stopped { forced });
                tracing::info!(?mode, elapsed, "capture stopped");
                Ok(keep.then_some(artifact))
            }
            Err(e) => {
                self.capability.force_release().await;
                self.session.lock().take();
                self.transition(RecordingState::Stopping, RecordingState::Idle);
                let err = stop_failure(e);
                let _ = self.event_tx.send(SessionEvent::StopFailed(err.to_string()));
                tracing::warn!(?mode, error = %err, "capture failed to stop");
                Err(err)
            }
        }
    }
}
