//! Simulated media pipeline driving a player.

use crate::clock::{SimClock, Tick};
use async_trait::async_trait;
use playhead_core::{
    CoreError, MediaSource, PlaybackPhase, Player, PlayerBackend, PlayerCommand, PlayerConfig,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Playback backend implementing [`PlayerBackend`] without any real media.
///
/// The pipeline walks a playlist, advances a [`SimClock`] while playing,
/// and answers widget commands, feeding every transition back through the
/// player's mutators so subscribers see the same event stream a real
/// pipeline would produce.
pub struct SimPlayer {
    player: Arc<Player>,
    playlist: Vec<MediaSource>,
    autoplay: bool,
    auto_advance: bool,
    tick_interval: Duration,
    metadata_delay: Duration,
    cancel_token: CancellationToken,
}

impl SimPlayer {
    /// Create a new simulated pipeline
    ///
    /// # Arguments
    /// * `config` - Playlist and timing settings
    /// * `player` - Player to drive
    /// * `cancel_token` - Optional external cancellation token for graceful shutdown
    #[must_use]
    pub fn new(
        config: &PlayerConfig,
        player: Arc<Player>,
        cancel_token: Option<CancellationToken>,
    ) -> Self {
        Self {
            player,
            playlist: config
                .sources
                .iter()
                .map(playhead_core::SourceConfig::to_media_source)
                .collect(),
            autoplay: config.autoplay,
            auto_advance: config.auto_advance,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            metadata_delay: Duration::from_millis(config.metadata_delay_ms),
            cancel_token: cancel_token.unwrap_or_default(),
        }
    }

    /// Start the pipeline in a background task
    #[must_use]
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.run().await {
                error!("Media pipeline stopped with error: {}", e);
            }
        })
    }

    /// Swap in a source and report its metadata once the load settles
    async fn load_source(&self, source: MediaSource) -> SimClock {
        info!("Loading source: {}", source.title);
        let duration = source.duration;
        self.player.set_source(source).await;
        // Metadata shows up a beat after the swap, like a real pipeline
        tokio::time::sleep(self.metadata_delay).await;
        self.player.set_metadata(duration).await;
        SimClock::new(duration, self.tick_interval)
    }

    async fn toggle_play(&self, clock: &mut Option<SimClock>) {
        match self.player.state().await.phase {
            PlaybackPhase::Playing => self.player.set_paused().await,
            PlaybackPhase::Paused => self.player.set_playing().await,
            PlaybackPhase::Ended => {
                // Replay seeks back to the start before playback resumes
                if let Some(clock) = clock.as_mut() {
                    clock.rewind();
                    self.player
                        .set_time(clock.position(), clock.duration())
                        .await;
                }
                self.player.set_playing().await;
            }
        }
    }

    async fn toggle_fullscreen(&self) {
        let is_fullscreen = self.player.state().await.is_fullscreen;
        self.player.set_fullscreen(!is_fullscreen).await;
    }

    /// Advance the playhead by one tick and handle running off the end
    async fn tick(&self, clock: &mut Option<SimClock>, index: &mut usize) {
        let Some(current) = clock.as_mut() else {
            return;
        };
        match current.advance() {
            Tick::Advanced { position } => {
                self.player.set_time(position, current.duration()).await;
            }
            Tick::Finished { position } => {
                self.player.set_time(position, current.duration()).await;
                self.player.set_ended().await;

                if self.auto_advance {
                    if let Some(next) = self.playlist.get(*index + 1).cloned() {
                        *index += 1;
                        *clock = Some(self.load_source(next).await);
                        self.player.set_playing().await;
                        return;
                    }
                }
                debug!("Reached the end of the playlist");
            }
        }
    }
}

#[async_trait]
impl PlayerBackend for SimPlayer {
    fn name(&self) -> &'static str {
        "sim"
    }

    fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    async fn run(&self) -> Result<(), CoreError> {
        info!("Starting simulated media pipeline");

        let Some(mut commands) = self.player.take_commands().await else {
            return Err(CoreError::CommandsClaimed);
        };

        let mut index = 0_usize;
        let mut clock = None;
        if let Some(first) = self.playlist.first().cloned() {
            clock = Some(self.load_source(first).await);
            if self.autoplay {
                self.player.set_playing().await;
            }
        } else {
            warn!("Playlist is empty; the pipeline will idle until shutdown");
        }

        loop {
            let playing = self.player.is_playing().await;
            tokio::select! {
                () = self.cancel_token.cancelled() => {
                    info!("Media pipeline shutting down gracefully");
                    break;
                }
                command = commands.recv() => {
                    match command {
                        Some(PlayerCommand::TogglePlay) => self.toggle_play(&mut clock).await,
                        Some(PlayerCommand::ToggleFullscreen) => self.toggle_fullscreen().await,
                        None => {
                            info!("All command senders dropped; stopping pipeline");
                            break;
                        }
                    }
                }
                () = tokio::time::sleep(self.tick_interval), if playing => {
                    self.tick(&mut clock, &mut index).await;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playhead_core::{MediaSurface, PlayerEvent, SourceConfig};
    use tokio::sync::broadcast;

    fn test_config(durations: &[f64], auto_advance: bool) -> PlayerConfig {
        PlayerConfig {
            sources: durations
                .iter()
                .enumerate()
                .map(|(i, d)| SourceConfig {
                    title: format!("Clip {i}"),
                    url: format!("media/clip-{i}.mp4"),
                    duration_secs: *d,
                })
                .collect(),
            autoplay: false,
            tick_interval_ms: 100,
            auto_advance,
            metadata_delay_ms: 0,
        }
    }

    async fn recv_named(rx: &mut broadcast::Receiver<PlayerEvent>, name: &str) -> PlayerEvent {
        loop {
            let event = rx.recv().await.unwrap();
            if event.name() == name {
                return event;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_startup_loads_first_source() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        let backend = Arc::new(SimPlayer::new(
            &test_config(&[10.0], false),
            player.clone(),
            None,
        ));
        let handle = backend.clone().start();

        assert_eq!(
            recv_named(&mut rx, "sourcechange").await,
            PlayerEvent::SourceChange
        );
        assert_eq!(
            recv_named(&mut rx, "loadedmetadata").await,
            PlayerEvent::LoadedMetadata { duration: 10.0 }
        );

        backend.stop();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_play_starts_and_pauses() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        let backend = Arc::new(SimPlayer::new(
            &test_config(&[10.0], false),
            player.clone(),
            None,
        ));
        let handle = backend.clone().start();
        let _ = recv_named(&mut rx, "loadedmetadata").await;

        player.toggle_play();
        assert_eq!(recv_named(&mut rx, "play").await, PlayerEvent::Play);

        // Position updates flow while playing
        let update = recv_named(&mut rx, "timeupdate").await;
        assert!(matches!(
            update,
            PlayerEvent::TimeUpdate { current_time, .. } if current_time > 0.0
        ));

        player.toggle_play();
        assert_eq!(recv_named(&mut rx, "pause").await, PlayerEvent::Pause);

        backend.stop();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_playback_runs_to_the_end() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        let backend = Arc::new(SimPlayer::new(
            &test_config(&[0.3], false),
            player.clone(),
            None,
        ));
        let handle = backend.clone().start();
        let _ = recv_named(&mut rx, "loadedmetadata").await;

        player.toggle_play();
        assert_eq!(recv_named(&mut rx, "ended").await, PlayerEvent::Ended);
        assert_eq!(player.state().await.phase, PlaybackPhase::Ended);

        // Replaying rewinds before playback resumes
        player.toggle_play();
        let rewind = recv_named(&mut rx, "timeupdate").await;
        assert_eq!(
            rewind,
            PlayerEvent::TimeUpdate {
                current_time: 0.0,
                duration: 0.3
            }
        );
        assert_eq!(recv_named(&mut rx, "play").await, PlayerEvent::Play);

        backend.stop();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_moves_to_next_source() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        let backend = Arc::new(SimPlayer::new(
            &test_config(&[0.2, 10.0], true),
            player.clone(),
            None,
        ));
        let handle = backend.clone().start();
        let _ = recv_named(&mut rx, "loadedmetadata").await;

        player.toggle_play();
        assert_eq!(recv_named(&mut rx, "ended").await, PlayerEvent::Ended);
        assert_eq!(
            recv_named(&mut rx, "sourcechange").await,
            PlayerEvent::SourceChange
        );
        assert_eq!(
            recv_named(&mut rx, "loadedmetadata").await,
            PlayerEvent::LoadedMetadata { duration: 10.0 }
        );
        // The next entry keeps playing without user input
        assert_eq!(recv_named(&mut rx, "play").await, PlayerEvent::Play);

        backend.stop();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_fullscreen_round_trip() {
        let player = Player::new(MediaSurface::new());
        let mut rx = player.subscribe();

        let backend = Arc::new(SimPlayer::new(
            &test_config(&[10.0], false),
            player.clone(),
            None,
        ));
        let handle = backend.clone().start();
        let _ = recv_named(&mut rx, "loadedmetadata").await;

        player.toggle_fullscreen();
        assert_eq!(
            recv_named(&mut rx, "fullscreenchange").await,
            PlayerEvent::FullscreenChange {
                is_fullscreen: true
            }
        );

        player.toggle_fullscreen();
        assert_eq!(
            recv_named(&mut rx, "fullscreenchange").await,
            PlayerEvent::FullscreenChange {
                is_fullscreen: false
            }
        );

        backend.stop();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_second_backend_cannot_claim_commands() {
        let player = Player::new(MediaSurface::new());
        let _commands = player.take_commands().await.unwrap();

        let backend = SimPlayer::new(&test_config(&[10.0], false), player, None);
        assert!(matches!(
            backend.run().await,
            Err(CoreError::CommandsClaimed)
        ));
    }
}
