//! Scripted fake hardware shared by the integration tests.
//!
//! Counts every hardware call, can be told to fail starts/stops, and can
//! hold a start or stop in flight until the test releases it.

use async_trait::async_trait;
use capsule_capture::{
    CaptureConfig, CaptureError, CaptureMode, CaptureResult, MediaArtifact, MediaCapability,
    MediaResultHandoff, RecordingSessionManager,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

pub struct FakeHardware {
    pub photos: AtomicUsize,
    pub video_starts: AtomicUsize,
    pub video_stops: AtomicUsize,
    pub audio_starts: AtomicUsize,
    pub audio_stops: AtomicUsize,
    pub releases: AtomicUsize,
    pub fail_start: AtomicBool,
    pub fail_stop: AtomicBool,
    gate_start: AtomicBool,
    gate_stop: AtomicBool,
    start_gate: Semaphore,
    stop_gate: Semaphore,
}

impl FakeHardware {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            photos: AtomicUsize::new(0),
            video_starts: AtomicUsize::new(0),
            video_stops: AtomicUsize::new(0),
            audio_starts: AtomicUsize::new(0),
            audio_stops: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
            fail_start: AtomicBool::new(false),
            fail_stop: AtomicBool::new(false),
            gate_start: AtomicBool::new(false),
            gate_stop: AtomicBool::new(false),
            start_gate: Semaphore::new(0),
            stop_gate: Semaphore::new(0),
        })
    }

    /// Park subsequent start calls until [`release_start`](Self::release_start).
    pub fn hold_starts(&self) {
        self.gate_start.store(true, Ordering::SeqCst);
    }

    pub fn release_start(&self) {
        self.start_gate.add_permits(1);
    }

    /// Park subsequent stop calls until [`release_stop`](Self::release_stop).
    pub fn hold_stops(&self) {
        self.gate_stop.store(true, Ordering::SeqCst);
    }

    pub fn release_stop(&self) {
        self.stop_gate.add_permits(1);
    }

    pub fn stop_calls(&self) -> usize {
        self.video_stops.load(Ordering::SeqCst) + self.audio_stops.load(Ordering::SeqCst)
    }

    async fn maybe_wait_start(&self) {
        if self.gate_start.load(Ordering::SeqCst) {
            self.start_gate.acquire().await.unwrap().forget();
        }
    }

    async fn maybe_wait_stop(&self) {
        if self.gate_stop.load(Ordering::SeqCst) {
            self.stop_gate.acquire().await.unwrap().forget();
        }
    }

    fn start_result(&self) -> CaptureResult<()> {
        if self.fail_start.load(Ordering::SeqCst) {
            Err(CaptureError::hardware("simulated acquire failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MediaCapability for FakeHardware {
    fn availability(&self, _mode: CaptureMode) -> CaptureResult<()> {
        Ok(())
    }

    async fn capture_photo(&self) -> CaptureResult<MediaArtifact> {
        self.photos.fetch_add(1, Ordering::SeqCst);
        Ok(MediaArtifact::new(CaptureMode::Photo, "fake://photo.jpg").with_size(120_000))
    }

    async fn start_video(&self) -> CaptureResult<()> {
        self.video_starts.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait_start().await;
        self.start_result()
    }

    async fn stop_video(&self) -> CaptureResult<MediaArtifact> {
        self.video_stops.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait_stop().await;
        if self.fail_stop.load(Ordering::SeqCst) {
            return Err(CaptureError::hardware("simulated finalize failure"));
        }
        Ok(MediaArtifact::new(CaptureMode::Video, "fake://clip.mp4").with_size(4_000_000))
    }

    async fn start_audio(&self) -> CaptureResult<()> {
        self.audio_starts.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait_start().await;
        self.start_result()
    }

    async fn stop_audio(&self) -> CaptureResult<MediaArtifact> {
        self.audio_stops.fetch_add(1, Ordering::SeqCst);
        self.maybe_wait_stop().await;
        if self.fail_stop.load(Ordering::SeqCst) {
            return Err(CaptureError::hardware("simulated finalize failure"));
        }
        Ok(MediaArtifact::new(CaptureMode::Audio, "fake://take.m4a"))
    }

    async fn force_release(&self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Manager plus its handoff slot, wired to the given fake.
pub fn manager_with(
    hardware: &Arc<FakeHardware>,
    config: CaptureConfig,
) -> (Arc<RecordingSessionManager>, Arc<MediaResultHandoff>) {
    let handoff = Arc::new(MediaResultHandoff::new());
    let manager = Arc::new(RecordingSessionManager::new(
        Arc::clone(hardware) as Arc<dyn MediaCapability>,
        Arc::clone(&handoff),
        config,
    ));
    (manager, handoff)
}
