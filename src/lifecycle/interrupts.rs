//! Lifecycle interrupt handler
//!
//! Watches the session manager from outside the UI thread of control and
//! forces safe stops when the app backgrounds or the user navigates away.
//! Backgrounding cannot be vetoed; navigation is held until the forced stop
//! settles, then allowed to proceed with a "recording stopped" notice.

use crate::error::{CaptureError, CaptureResult};
use crate::session::manager::RecordingSessionManager;
use crate::session::state::RecordingState;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::signals::{
    AppLifecycleEvent, InterruptNotice, NavigationDecision, NavigationIntent,
};

pub struct LifecycleInterruptHandler {
    manager: Arc<RecordingSessionManager>,
    notice_tx: broadcast::Sender<InterruptNotice>,
}

impl LifecycleInterruptHandler {
    pub fn new(manager: Arc<RecordingSessionManager>) -> Self {
        let (notice_tx, _) = broadcast::channel(16);
        Self { manager, notice_tx }
    }

    /// Subscribe to forced-stop notices
    pub fn subscribe_notices(&self) -> broadcast::Receiver<InterruptNotice> {
        self.notice_tx.subscribe()
    }

    /// Handle a foreground/background transition.
    ///
    /// On backgrounding with a session in flight, the capture is stopped best
    /// effort; hardware failures are swallowed and the manager is guaranteed
    /// idle afterwards.
    pub async fn on_app_event(&self, event: AppLifecycleEvent) {
        match event {
            AppLifecycleEvent::Foreground => {
                tracing::debug!("app returned to foreground");
            }
            AppLifecycleEvent::Background => {
                tracing::info!("app backgrounded");
                if self.manager.force_stop().await {
                    let _ = self.notice_tx.send(InterruptNotice::backgrounded());
                }
            }
        }
    }

    /// Intercept an attempt to leave the capture screen.
    ///
    /// Suspends until any in-flight session has been force-stopped (a stop
    /// landing while still starting is queued behind the pending start), so
    /// the caller can let the transition proceed only after return.
    pub async fn on_navigation(&self, intent: NavigationIntent) -> NavigationDecision {
        if self.manager.state() == RecordingState::Idle {
            return NavigationDecision::Proceed;
        }

        tracing::info!(?intent, "navigation held for forced stop");
        if self.manager.force_stop().await {
            let notice = InterruptNotice::navigated_away(intent);
            let _ = self.notice_tx.send(notice.clone());
            NavigationDecision::ProceedAfterStop(notice)
        } else {
            NavigationDecision::Proceed
        }
    }

    /// Veto direct settings access while a session is active.
    pub fn guard_settings(&self) -> CaptureResult<()> {
        match self.manager.state() {
            RecordingState::Idle => Ok(()),
            _ => Err(CaptureError::guard(
                "stop the recording before opening settings",
            )),
        }
    }

    /// Drive backgrounding signals from a broadcast feed on a tokio task.
    pub fn spawn_app_event_task(
        self: Arc<Self>,
        mut events: broadcast::Receiver<AppLifecycleEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => self.on_app_event(event).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "lifecycle events lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
