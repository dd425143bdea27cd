//! Lifecycle and navigation signal types
//!
//! The surrounding app shell translates its platform events into these and
//! feeds them to the interrupt handler.

use serde::{Deserialize, Serialize};

/// App foreground/background transitions. Cannot be vetoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppLifecycleEvent {
    Foreground,
    Background,
}

/// An attempt to leave the capture screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationIntent {
    /// Screen lost focus
    Blur,
    /// Explicit back action
    Back,
    /// Bottom-tab switch
    TabSwitch,
    /// Navigation into settings
    Settings,
}

impl NavigationIntent {
    pub fn describe(&self) -> &'static str {
        match self {
            NavigationIntent::Blur => "screen lost focus",
            NavigationIntent::Back => "back pressed",
            NavigationIntent::TabSwitch => "tab switched",
            NavigationIntent::Settings => "settings opened",
        }
    }
}

/// Why a capture was force-stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterruptReason {
    Backgrounded,
    NavigatedAway,
}

/// User-facing notice surfaced after a forced stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterruptNotice {
    pub reason: InterruptReason,
    pub message: String,
}

impl InterruptNotice {
    pub fn backgrounded() -> Self {
        Self {
            reason: InterruptReason::Backgrounded,
            message: "recording stopped: app moved to the background".into(),
        }
    }

    pub fn navigated_away(intent: NavigationIntent) -> Self {
        Self {
            reason: InterruptReason::NavigatedAway,
            message: format!("recording stopped: {}", intent.describe()),
        }
    }
}

/// Outcome of an intercepted navigation attempt.
///
/// Navigation is never refused outright; at most it is held until a safe
/// stop completes.
#[derive(Debug, Clone)]
pub enum NavigationDecision {
    /// Nothing was active; navigate immediately
    Proceed,
    /// A capture was force-stopped first; surface the notice, then navigate
    ProceedAfterStop(InterruptNotice),
}

impl NavigationDecision {
    pub fn notice(&self) -> Option<&InterruptNotice> {
        match self {
            NavigationDecision::Proceed => None,
            NavigationDecision::ProceedAfterStop(notice) => Some(notice),
        }
    }
}
