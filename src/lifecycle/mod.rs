//! Lifecycle interruption module
//!
//! Signal types for app-lifecycle and navigation events, and the handler
//! that turns them into safe forced stops.

pub mod interrupts;
pub mod signals;

pub use interrupts::LifecycleInterruptHandler;
pub use signals::{
    AppLifecycleEvent, InterruptNotice, InterruptReason, NavigationDecision, NavigationIntent,
};
