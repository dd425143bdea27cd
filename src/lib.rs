//! Capsule capture core
//!
//! The session manager behind Capsule's capture screen: exclusive ownership
//! of the photo/video/audio hardware, a bounded recording state machine that
//! stays consistent under asynchronous hardware completion, and an interrupt
//! handler that forces safe stops on backgrounding and navigation-away.
//!
//! Hardware is consumed through the injected [`capture::MediaCapability`]
//! trait; finished artifacts leave through [`session::MediaResultHandoff`].

pub mod capture;
pub mod error;
pub mod lifecycle;
pub mod screen;
pub mod session;

pub use capture::{MediaCapability, NullCapability};
pub use error::{CaptureError, CaptureResult, ErrorResponse};
pub use lifecycle::{
    AppLifecycleEvent, InterruptNotice, InterruptReason, LifecycleInterruptHandler,
    NavigationDecision, NavigationIntent,
};
pub use screen::{CaptureScreen, ShutterOutcome};
pub use session::{
    CaptureConfig, CaptureMode, CaptureModeController, CapsulePayload, MediaArtifact,
    MediaResultHandoff, RecordingSessionManager, RecordingState, SessionEvent, SessionSnapshot,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging for binaries embedding the capture core.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "capsule_capture=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
