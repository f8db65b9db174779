/// Coarse playback phase of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    /// Playhead is idle; the initial state
    #[default]
    Paused,
    /// Playhead is advancing
    Playing,
    /// Playhead reached the end of the media
    Ended,
}

impl PlaybackPhase {
    /// Whether the playhead is currently advancing.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// A playable media source.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    /// Human-readable title
    pub title: String,
    /// Location of the media
    pub url: String,
    /// Nominal duration in seconds, surfaced once metadata loads
    pub duration: f64,
}

impl MediaSource {
    /// Create a new media source
    pub fn new(title: impl Into<String>, url: impl Into<String>, duration: f64) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            duration,
        }
    }
}

/// Snapshot of everything the player currently knows about playback.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    /// Current playback phase
    pub phase: PlaybackPhase,
    /// Seconds into the media
    pub current_time: f64,
    /// Seconds of media in total; 0.0 until metadata loads
    pub duration: f64,
    /// Whether the player occupies the whole screen
    pub is_fullscreen: bool,
    /// Currently loaded media (None before the first source is set)
    pub source: Option<MediaSource>,
}

impl PlayerState {
    /// Check if the playhead is currently advancing
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }
}
