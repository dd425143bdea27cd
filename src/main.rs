//! Demo driver for the capture core.
//!
//! Walks a stub capability through the capture screen's main flows: photo,
//! an interrupted video session, and an audio take handed to the
//! capsule-creation flow.

use anyhow::Result;
use capsule_capture::{
    AppLifecycleEvent, CaptureConfig, CaptureMode, CaptureScreen, NullCapability,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

#[tokio::main]
async fn main() -> Result<()> {
    capsule_capture::init_tracing();
    tracing::info!("capsule-capture demo v{}", env!("CARGO_PKG_VERSION"));

    let screen = CaptureScreen::new(Arc::new(NullCapability), CaptureConfig::default());

    let mut events = screen.manager().subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::info!(?event, "session event");
        }
    });

    // Photo mode: atomic capture, state stays idle
    screen.trigger_shutter().await?;
    let _ = screen.take_for_capsule();

    // Video session interrupted by backgrounding
    let (lifecycle_tx, lifecycle_rx) = broadcast::channel(16);
    let _driver = Arc::clone(screen.interrupts()).spawn_app_event_task(lifecycle_rx);
    let mut notices = screen.interrupts().subscribe_notices();

    screen.select_mode(CaptureMode::Video)?;
    screen.trigger_shutter().await?;
    tokio::time::sleep(Duration::from_millis(200)).await;

    lifecycle_tx.send(AppLifecycleEvent::Background)?;
    let notice = notices.recv().await?;
    tracing::info!(message = %notice.message, "forced stop notice");

    // Audio take handed to the capsule flow
    screen.select_mode(CaptureMode::Audio)?;
    screen.trigger_shutter().await?;
    tokio::time::sleep(Duration::from_millis(200)).await;
    screen.trigger_shutter().await?;

    if let Some(payload) = screen.take_for_capsule() {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
