//! Error types and handling
//!
//! Common error types used across the capture core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Device or permission missing; surfaced before any state transition.
    #[error("hardware unavailable: {0}")]
    HardwareUnavailable(String),

    /// Device-level fault reported by a capability implementation.
    #[error("hardware fault: {0}")]
    Hardware(String),

    /// Acquire or encode-start error; the session returned to idle.
    #[error("failed to start capture: {0}")]
    StartFailed(String),

    /// Finalize or I/O error; the session was forced back to idle.
    #[error("failed to stop capture: {0}")]
    StopFailed(String),

    #[error("another capture session is already active")]
    AlreadyActive,

    #[error("capture mode is locked during an active session")]
    ModeLocked,

    /// Rejected interaction with a user-facing explanation.
    #[error("{0}")]
    Guard(String),
}

impl CaptureError {
    pub fn hardware(message: impl Into<String>) -> Self {
        Self::Hardware(message.into())
    }

    pub fn guard(message: impl Into<String>) -> Self {
        Self::Guard(message.into())
    }
}

/// Error response for the UI layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<CaptureError> for ErrorResponse {
    fn from(error: CaptureError) -> Self {
        let code = match &error {
            CaptureError::HardwareUnavailable(_) => "HARDWARE_UNAVAILABLE",
            CaptureError::Hardware(_) => "HARDWARE_FAULT",
            CaptureError::StartFailed(_) => "START_FAILED",
            CaptureError::StopFailed(_) => "STOP_FAILED",
            CaptureError::AlreadyActive => "ALREADY_ACTIVE",
            CaptureError::ModeLocked => "MODE_LOCKED",
            CaptureError::Guard(_) => "GUARD_VIOLATION",
        };

        ErrorResponse {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}

/// Result type alias using CaptureError
pub type CaptureResult<T> = Result<T, CaptureError>;
