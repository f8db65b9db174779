//! Simulated remote playback route.

use playhead_core::{RemoteEvent, RemotePlayback};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// In-process stand-in for a wireless playback route.
///
/// There is no real network here, so the target picker is reduced to a
/// toggle: opening it connects to an imaginary target, opening it again
/// disconnects. Availability can be flipped programmatically to exercise
/// listeners.
pub struct SimRemotePlayback {
    technology: String,
    available: AtomicBool,
    connected: AtomicBool,
    event_tx: broadcast::Sender<RemoteEvent>,
}

impl SimRemotePlayback {
    /// Create a route that starts available and disconnected
    #[must_use]
    pub fn new(technology: impl Into<String>) -> Arc<Self> {
        let (event_tx, _) = broadcast::channel(16);
        Arc::new(Self {
            technology: technology.into(),
            available: AtomicBool::new(true),
            connected: AtomicBool::new(false),
            event_tx,
        })
    }

    /// Report whether a wireless target is reachable
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
        let _ = self
            .event_tx
            .send(RemoteEvent::AvailabilityChanged { available });
    }

    /// Connect to or disconnect from the imaginary target
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
        let _ = self
            .event_tx
            .send(RemoteEvent::ConnectionChanged { connected });
    }

    /// Whether a wireless target is currently reachable
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

impl RemotePlayback for SimRemotePlayback {
    fn technology(&self) -> &str {
        &self.technology
    }

    fn show_picker(&self) {
        let connected = !self.connected.load(Ordering::SeqCst);
        info!(
            "{} picker opened; {}",
            self.technology,
            if connected {
                "connecting to target"
            } else {
                "disconnecting from target"
            }
        );
        self.set_connected(connected);
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn subscribe(&self) -> broadcast::Receiver<RemoteEvent> {
        self.event_tx.subscribe()
    }
}
