//! Capture mode controller
//!
//! Holds the selected modality and vetoes switches while a session is
//! active. Observes the manager's state through a watch channel rather than
//! reaching into the state machine.

use crate::error::{CaptureError, CaptureResult};
use crate::session::manager::SessionEvent;
use crate::session::state::{CaptureMode, RecordingState};
use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};

pub struct CaptureModeController {
    mode: RwLock<CaptureMode>,
    state: watch::Receiver<RecordingState>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl CaptureModeController {
    pub fn new(
        initial: CaptureMode,
        state: watch::Receiver<RecordingState>,
        event_tx: broadcast::Sender<SessionEvent>,
    ) -> Self {
        Self {
            mode: RwLock::new(initial),
            state,
            event_tx,
        }
    }

    /// The currently selected modality
    pub fn active_mode(&self) -> CaptureMode {
        *self.mode.read()
    }

    /// Switch modality. Succeeds only while the session manager is idle;
    /// otherwise fails with `ModeLocked` and leaves the mode unchanged.
    pub fn select_mode(&self, mode: CaptureMode) -> CaptureResult<()> {
        if *self.state.borrow() != RecordingState::Idle {
            return Err(CaptureError::ModeLocked);
        }

        let mut current = self.mode.write();
        if *current != mode {
            *current = mode;
            let _ = self.event_tx.send(SessionEvent::ModeChanged(mode));
            tracing::debug!(?mode, "capture mode selected");
        }
        Ok(())
    }
}
