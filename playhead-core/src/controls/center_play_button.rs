use crate::event::PlayerEvent;
use crate::icon::Icon;
use crate::playback::{PlaybackPhase, PlayerState};

/// Presentation state for the large play button overlaying the video.
///
/// The overlay hides while media plays and reappears whenever playback
/// stops. After the media ends it shows the replay glyph so the user knows
/// a click starts over rather than resuming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterPlayButtonState {
    hidden: bool,
    icon: Icon,
}

impl CenterPlayButtonState {
    /// Create the initial state; visible with the play glyph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hidden: false,
            icon: Icon::Play,
        }
    }

    /// Create state reflecting a player snapshot: hidden while media plays,
    /// showing the replay glyph once it has ended
    #[must_use]
    pub const fn from_snapshot(snapshot: &PlayerState) -> Self {
        Self {
            hidden: snapshot.is_playing(),
            icon: match snapshot.phase {
                PlaybackPhase::Ended => Icon::Replay,
                _ => Icon::Play,
            },
        }
    }

    /// Fold a player event into the state
    pub fn apply(&mut self, event: &PlayerEvent) {
        match event {
            PlayerEvent::Play => self.hidden = true,
            PlayerEvent::Pause | PlayerEvent::SourceChange => {
                self.hidden = false;
                self.icon = Icon::Play;
            }
            PlayerEvent::Ended => {
                self.hidden = false;
                self.icon = Icon::Replay;
            }
            _ => {}
        }
    }

    /// Whether the overlay is currently hidden
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.hidden
    }

    /// Glyph to render when visible
    #[must_use]
    pub const fn icon(self) -> Icon {
        self.icon
    }

    /// Class string for the overlay container
    #[must_use]
    pub const fn container_class(self) -> &'static str {
        if self.hidden {
            "center-play hidden"
        } else {
            "center-play"
        }
    }

    /// Tooltip and accessible label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.icon {
            Icon::Replay => "Replay",
            _ => "Play (K)",
        }
    }
}

impl Default for CenterPlayButtonState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_visible_with_play_glyph() {
        let state = CenterPlayButtonState::new();
        assert!(!state.is_hidden());
        assert_eq!(state.icon(), Icon::Play);
        assert_eq!(state.container_class(), "center-play");
    }

    #[test]
    fn test_play_hides_the_overlay() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Play);
        assert!(state.is_hidden());
        assert_eq!(state.container_class(), "center-play hidden");
    }

    #[test]
    fn test_pause_brings_it_back_with_play_glyph() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Play);
        state.apply(&PlayerEvent::Pause);
        assert!(!state.is_hidden());
        assert_eq!(state.icon(), Icon::Play);
    }

    #[test]
    fn test_ended_shows_replay_glyph() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Play);
        state.apply(&PlayerEvent::Ended);
        assert!(!state.is_hidden());
        assert_eq!(state.icon(), Icon::Replay);
        assert_eq!(state.label(), "Replay");
    }

    #[test]
    fn test_replay_then_play_hides_again() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Play);
        state.apply(&PlayerEvent::Ended);
        state.apply(&PlayerEvent::Play);
        assert!(state.is_hidden());
    }

    #[test]
    fn test_source_change_resets_replay_glyph() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Ended);
        state.apply(&PlayerEvent::SourceChange);
        assert!(!state.is_hidden());
        assert_eq!(state.icon(), Icon::Play);
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Play);
        state.apply(&PlayerEvent::TimeUpdate {
            current_time: 5.0,
            duration: 60.0,
        });
        state.apply(&PlayerEvent::FullscreenChange {
            is_fullscreen: true,
        });
        state.apply(&PlayerEvent::LoadedMetadata { duration: 60.0 });
        assert!(state.is_hidden());
    }

    #[test]
    fn test_from_snapshot_of_playing_player_is_hidden() {
        let snapshot = PlayerState {
            phase: PlaybackPhase::Playing,
            ..PlayerState::default()
        };
        let state = CenterPlayButtonState::from_snapshot(&snapshot);
        assert!(state.is_hidden());
    }

    #[test]
    fn test_from_snapshot_of_ended_player_shows_replay() {
        let snapshot = PlayerState {
            phase: PlaybackPhase::Ended,
            ..PlayerState::default()
        };
        let state = CenterPlayButtonState::from_snapshot(&snapshot);
        assert!(!state.is_hidden());
        assert_eq!(state.icon(), Icon::Replay);
    }

    #[test]
    fn test_from_snapshot_of_idle_player_matches_new() {
        let state = CenterPlayButtonState::from_snapshot(&PlayerState::default());
        assert_eq!(state, CenterPlayButtonState::new());
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut state = CenterPlayButtonState::new();
        state.apply(&PlayerEvent::Ended);
        let after_first = state;
        state.apply(&PlayerEvent::Ended);
        assert_eq!(state, after_first);
    }
}
