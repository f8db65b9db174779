/// Events emitted by the player core.
///
/// Each variant carries exactly the payload its listeners need, so a
/// widget can match on the variants it cares about and ignore the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback started or resumed
    Play,
    /// Playback was paused
    Pause,
    /// Playback reached the end of the media
    Ended,
    /// The media source was swapped for another one
    SourceChange,
    /// The player entered or left fullscreen
    FullscreenChange { is_fullscreen: bool },
    /// Regular playback position update
    TimeUpdate { current_time: f64, duration: f64 },
    /// Media metadata became available
    LoadedMetadata { duration: f64 },
}

impl PlayerEvent {
    /// Lowercase event name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Ended => "ended",
            Self::SourceChange => "sourcechange",
            Self::FullscreenChange { .. } => "fullscreenchange",
            Self::TimeUpdate { .. } => "timeupdate",
            Self::LoadedMetadata { .. } => "loadedmetadata",
        }
    }
}

/// Requests a widget sends back to whichever backend drives the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Start playback if paused or ended, pause it otherwise
    TogglePlay,
    /// Enter fullscreen if windowed, leave it otherwise
    ToggleFullscreen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(PlayerEvent::Play.name(), "play");
        assert_eq!(PlayerEvent::SourceChange.name(), "sourcechange");
        assert_eq!(
            PlayerEvent::TimeUpdate {
                current_time: 1.0,
                duration: 2.0
            }
            .name(),
            "timeupdate"
        );
    }
}
