use std::sync::Arc;
use tokio::sync::broadcast;

/// State changes a remote playback route reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteEvent {
    /// A wireless target appeared on or vanished from the network
    AvailabilityChanged { available: bool },
    /// Playback switched onto or off of a wireless target
    ConnectionChanged { connected: bool },
}

/// Trait for remote playback routes (AirPlay and friends).
pub trait RemotePlayback: Send + Sync {
    /// Marketing name of the underlying technology, e.g. "AirPlay"
    fn technology(&self) -> &str;

    /// Open the target picker so the user can choose a device
    fn show_picker(&self);

    /// Whether playback currently goes to a wireless target
    fn is_connected(&self) -> bool;

    /// Subscribe to route state changes
    fn subscribe(&self) -> broadcast::Receiver<RemoteEvent>;
}

/// The surface a player renders into.
///
/// Remote playback is optional equipment. [`MediaSurface::remote_playback`]
/// returns `None` on surfaces without a route, and callers treat that as
/// the feature being absent, not as an error.
#[derive(Clone, Default)]
pub struct MediaSurface {
    remote: Option<Arc<dyn RemotePlayback>>,
}

impl MediaSurface {
    /// Create a surface with no remote playback route
    #[must_use]
    pub fn new() -> Self {
        Self { remote: None }
    }

    /// Create a surface backed by a remote playback route
    #[must_use]
    pub fn with_remote_playback(remote: Arc<dyn RemotePlayback>) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    /// Probe for the remote playback route, if this surface has one
    #[must_use]
    pub fn remote_playback(&self) -> Option<Arc<dyn RemotePlayback>> {
        self.remote.clone()
    }
}
