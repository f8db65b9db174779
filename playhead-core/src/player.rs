use crate::event::{PlayerCommand, PlayerEvent};
use crate::playback::{MediaSource, PlaybackPhase, PlayerState};
use crate::remote::MediaSurface;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, Mutex, RwLock};
use tracing::debug;

const LOG_TARGET: &str = "playhead_core::player";

/// Engine that holds playback state and fans events out to the widgets.
///
/// Widgets subscribe for [`PlayerEvent`]s and send [`PlayerCommand`]s back;
/// whichever backend drives the media claims the command stream once via
/// [`Player::take_commands`] and calls the `set_*` mutators as playback
/// progresses.
pub struct Player {
    inner: RwLock<PlayerState>,
    event_tx: broadcast::Sender<PlayerEvent>,
    command_tx: mpsc::UnboundedSender<PlayerCommand>,
    command_rx: Mutex<Option<mpsc::UnboundedReceiver<PlayerCommand>>>,
    surface: MediaSurface,
}

impl Player {
    /// Create a new player rendering into the given surface
    #[must_use]
    pub fn new(surface: MediaSurface) -> Arc<Self> {
        let (event_tx, _) = broadcast::channel(64);
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        Arc::new(Self {
            inner: RwLock::new(PlayerState::default()),
            event_tx,
            command_tx,
            command_rx: Mutex::new(Some(command_rx)),
            surface,
        })
    }

    /// Subscribe to player events
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.event_tx.subscribe()
    }

    /// Get the surface this player renders into
    #[must_use]
    pub fn media_surface(&self) -> MediaSurface {
        self.surface.clone()
    }

    /// Claim the command stream.
    ///
    /// Only one backend can drive the player; the first caller gets the
    /// receiver and every later call returns `None`.
    pub async fn take_commands(&self) -> Option<mpsc::UnboundedReceiver<PlayerCommand>> {
        self.command_rx.lock().await.take()
    }

    /// Request that the backend toggle between playing and paused
    pub fn toggle_play(&self) {
        if self.command_tx.send(PlayerCommand::TogglePlay).is_err() {
            debug!(target: LOG_TARGET, "toggle_play dropped: no backend is listening");
        }
    }

    /// Request that the backend toggle fullscreen
    pub fn toggle_fullscreen(&self) {
        if self.command_tx.send(PlayerCommand::ToggleFullscreen).is_err() {
            debug!(target: LOG_TARGET, "toggle_fullscreen dropped: no backend is listening");
        }
    }

    /// Mark playback as started or resumed
    pub async fn set_playing(&self) {
        self.inner.write().await.phase = PlaybackPhase::Playing;
        let _ = self.event_tx.send(PlayerEvent::Play);
    }

    /// Mark playback as paused
    pub async fn set_paused(&self) {
        self.inner.write().await.phase = PlaybackPhase::Paused;
        let _ = self.event_tx.send(PlayerEvent::Pause);
    }

    /// Mark that the playhead reached the end of the media
    pub async fn set_ended(&self) {
        {
            let mut inner = self.inner.write().await;
            inner.phase = PlaybackPhase::Ended;
            // A real media element leaves the playhead parked on the last frame
            inner.current_time = inner.duration;
        }
        let _ = self.event_tx.send(PlayerEvent::Ended);
    }

    /// Swap in a new media source.
    ///
    /// The playhead rewinds and the duration resets until the new source
    /// reports metadata.
    pub async fn set_source(&self, source: MediaSource) {
        {
            let mut inner = self.inner.write().await;
            inner.source = Some(source);
            inner.phase = PlaybackPhase::Paused;
            inner.current_time = 0.0;
            inner.duration = 0.0;
        }
        let _ = self.event_tx.send(PlayerEvent::SourceChange);
    }

    /// Record that media metadata became available
    pub async fn set_metadata(&self, duration: f64) {
        self.inner.write().await.duration = duration;
        let _ = self.event_tx.send(PlayerEvent::LoadedMetadata { duration });
    }

    /// Advance the playhead
    pub async fn set_time(&self, current_time: f64, duration: f64) {
        {
            let mut inner = self.inner.write().await;
            inner.current_time = current_time;
            inner.duration = duration;
        }
        let _ = self.event_tx.send(PlayerEvent::TimeUpdate {
            current_time,
            duration,
        });
    }

    /// Record a fullscreen transition
    pub async fn set_fullscreen(&self, is_fullscreen: bool) {
        self.inner.write().await.is_fullscreen = is_fullscreen;
        let _ = self
            .event_tx
            .send(PlayerEvent::FullscreenChange { is_fullscreen });
    }

    /// Get a snapshot of the current player state
    pub async fn state(&self) -> PlayerState {
        self.inner.read().await.clone()
    }

    /// Check if playback is currently advancing
    pub async fn is_playing(&self) -> bool {
        self.inner.read().await.is_playing()
    }
}

impl Default for Player {
    fn default() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            inner: RwLock::new(PlayerState::default()),
            event_tx,
            command_tx,
            command_rx: Mutex::new(Some(command_rx)),
            surface: MediaSurface::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::TimeDisplayState;

    #[tokio::test]
    async fn test_set_playing_emits_and_updates_state() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        player.set_playing().await;

        assert_eq!(rx.recv().await.ok(), Some(PlayerEvent::Play));
        assert!(player.is_playing().await);
    }

    #[tokio::test]
    async fn test_set_source_rewinds_playhead() {
        let player = Player::new(MediaSurface::new());
        player.set_time(42.0, 180.0).await;

        let mut rx = player.subscribe();
        player
            .set_source(MediaSource::new("Clip", "media/clip.mp4", 90.0))
            .await;

        assert_eq!(rx.recv().await.ok(), Some(PlayerEvent::SourceChange));
        let state = player.state().await;
        assert_eq!(state.phase, PlaybackPhase::Paused);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 0.0);
        assert_eq!(state.source.map(|s| s.title), Some("Clip".to_string()));
    }

    #[tokio::test]
    async fn test_set_ended_parks_playhead_at_duration() {
        let player = Player::new(MediaSurface::new());
        player.set_metadata(90.0).await;
        player.set_time(89.8, 90.0).await;

        player.set_ended().await;

        let state = player.state().await;
        assert_eq!(state.phase, PlaybackPhase::Ended);
        assert_eq!(state.current_time, 90.0);
    }

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        player.set_playing().await;
        player.set_paused().await;

        assert_eq!(rx.recv().await.ok(), Some(PlayerEvent::Play));
        assert_eq!(rx.recv().await.ok(), Some(PlayerEvent::Pause));
    }

    #[tokio::test]
    async fn test_toggle_play_reaches_command_stream() {
        let player = Player::new(MediaSurface::new());
        let mut commands = player.take_commands().await.unwrap();

        player.toggle_play();
        player.toggle_fullscreen();

        assert_eq!(commands.recv().await, Some(PlayerCommand::TogglePlay));
        assert_eq!(commands.recv().await, Some(PlayerCommand::ToggleFullscreen));
    }

    #[tokio::test]
    async fn test_take_commands_only_once() {
        let player = Player::new(MediaSurface::new());
        assert!(player.take_commands().await.is_some());
        assert!(player.take_commands().await.is_none());
    }

    #[tokio::test]
    async fn test_late_subscriber_recovers_from_snapshot() {
        let player = Player::new(MediaSurface::new());
        player
            .set_source(MediaSource::new("Big Buck Bunny", "media/bunny.mp4", 596.0))
            .await;
        player.set_metadata(596.0).await;

        // Broadcast does not replay; a subscriber arriving after those
        // events sees an empty channel
        let mut rx = player.subscribe();
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));

        // The snapshot carries what the missed events announced
        let state = player.state().await;
        assert_eq!(
            state.source.as_ref().map(|s| s.title.as_str()),
            Some("Big Buck Bunny")
        );
        assert_eq!(TimeDisplayState::from_snapshot(&state).text(), "0:00 / 9:56");
    }

    #[tokio::test]
    async fn test_toggle_without_backend_is_silent() {
        let player = Player::new(MediaSurface::new());
        let commands = player.take_commands().await.unwrap();
        drop(commands);

        // No backend left; the request is dropped without panicking.
        player.toggle_play();
    }
}
