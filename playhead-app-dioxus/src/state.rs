use dioxus::prelude::*;
use playhead_core::{
    CenterPlayButtonState, FullscreenButtonState, MediaSurface, PlayButtonState, PlayerEvent,
    PlayerState, RemoteButtonState, RemoteEvent, TimeDisplayState,
};

/// Player UI state shared across components.
///
/// Each control keeps its own small state machine in `playhead-core`; this
/// struct wraps them in signals so the bridge can feed events in and the
/// components rerender on their own slice.
#[derive(Clone, Copy)]
pub struct PlayerUiState {
    /// Play/pause toggle in the control bar
    pub play_button: Signal<PlayButtonState>,
    /// Large overlay button on the media surface
    pub center_play: Signal<CenterPlayButtonState>,
    /// Fullscreen toggle
    pub fullscreen: Signal<FullscreenButtonState>,
    /// Elapsed / total time readout
    pub time_display: Signal<TimeDisplayState>,
    /// Remote playback route picker
    pub remote_button: Signal<RemoteButtonState>,
    /// Title of the current source, shown over the media surface
    pub source_title: Signal<Option<String>>,
}

impl PlayerUiState {
    /// Create UI state for a player rendering onto `surface`.
    #[must_use]
    pub fn new(surface: &MediaSurface) -> Self {
        Self {
            play_button: Signal::new(PlayButtonState::new()),
            center_play: Signal::new(CenterPlayButtonState::new()),
            fullscreen: Signal::new(FullscreenButtonState::new()),
            time_display: Signal::new(TimeDisplayState::new()),
            remote_button: Signal::new(RemoteButtonState::new(surface.remote_playback())),
            source_title: Signal::new(None),
        }
    }

    /// Reset every control from a player snapshot.
    ///
    /// Broadcast events are not replayed, so a subscriber that arrives
    /// after the pipeline started must seed from the snapshot and fold
    /// events from there.
    pub fn apply_snapshot(&mut self, snapshot: &PlayerState) {
        self.play_button.set(PlayButtonState::from_snapshot(snapshot));
        self.center_play
            .set(CenterPlayButtonState::from_snapshot(snapshot));
        self.fullscreen
            .set(FullscreenButtonState::from_snapshot(snapshot));
        self.time_display
            .set(TimeDisplayState::from_snapshot(snapshot));
        self.source_title
            .set(snapshot.source.as_ref().map(|source| source.title.clone()));
    }

    /// Route a player event to the controls it affects.
    ///
    /// Only the signals a variant can change are written; a position tick
    /// leaves the button signals untouched.
    pub fn apply_player_event(&mut self, event: &PlayerEvent) {
        match event {
            PlayerEvent::Play
            | PlayerEvent::Pause
            | PlayerEvent::Ended
            | PlayerEvent::SourceChange => {
                self.play_button.write().apply(event);
                self.center_play.write().apply(event);
            }
            PlayerEvent::FullscreenChange { .. } => {
                self.fullscreen.write().apply(event);
            }
            PlayerEvent::TimeUpdate { .. } | PlayerEvent::LoadedMetadata { .. } => {
                self.time_display.write().apply(event);
            }
        }
    }

    /// Route a remote playback event to the remote button.
    pub fn apply_remote_event(&mut self, event: RemoteEvent) {
        self.remote_button.write().apply(&event);
    }

    /// Update the displayed source title.
    pub fn set_source_title(&mut self, title: Option<String>) {
        self.source_title.set(title);
    }
}
