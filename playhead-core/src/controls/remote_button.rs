use crate::icon::Icon;
use crate::remote::{RemoteEvent, RemotePlayback};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Presentation state for the remote playback button.
///
/// The button is built from whatever route the media surface offers. A
/// surface without one yields an unsupported button that stays hidden and
/// swallows picker clicks; everything degrades silently rather than
/// erroring, since missing remote playback is the normal case on most
/// setups.
#[derive(Clone)]
pub struct RemoteButtonState {
    route: Option<Arc<dyn RemotePlayback>>,
    available: bool,
    connected: bool,
}

impl RemoteButtonState {
    /// Build the button state from the surface's probe result.
    ///
    /// With a route present the button starts visible and reflects the
    /// route's current connection; without one it starts hidden.
    #[must_use]
    pub fn new(route: Option<Arc<dyn RemotePlayback>>) -> Self {
        let available = route.is_some();
        let connected = route.as_deref().is_some_and(|r| r.is_connected());
        Self {
            route,
            available,
            connected,
        }
    }

    /// Whether the surface offers remote playback at all
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.route.is_some()
    }

    /// Whether a wireless target is currently reachable
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Whether playback currently goes to a wireless target
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Fold a route event into the state
    pub fn apply(&mut self, event: &RemoteEvent) {
        match *event {
            RemoteEvent::AvailabilityChanged { available } => self.available = available,
            RemoteEvent::ConnectionChanged { connected } => self.connected = connected,
        }
    }

    /// Open the route's target picker; a no-op without a route
    pub fn show_picker(&self) {
        if let Some(route) = &self.route {
            route.show_picker();
        }
    }

    /// Subscribe to route events, if the surface has a route
    #[must_use]
    pub fn subscribe(&self) -> Option<broadcast::Receiver<RemoteEvent>> {
        self.route.as_deref().map(RemotePlayback::subscribe)
    }

    /// Glyph to render
    #[must_use]
    pub const fn icon(&self) -> Icon {
        Icon::Remote
    }

    /// Name of the route technology, e.g. "AirPlay"
    #[must_use]
    pub fn technology(&self) -> &str {
        self.route
            .as_deref()
            .map_or("Remote Playback", RemotePlayback::technology)
    }

    /// Tooltip and accessible label
    #[must_use]
    pub fn label(&self) -> String {
        if self.connected {
            format!("{} (Connected)", self.technology())
        } else {
            self.technology().to_string()
        }
    }

    /// Class string for the button
    #[must_use]
    pub fn class(&self) -> String {
        let mut class = String::from("remote-button");
        if self.connected {
            class.push_str(" active");
        }
        if !self.available {
            class.push_str(" hidden");
        }
        class
    }
}
