use crate::event::PlayerEvent;
use crate::icon::Icon;
use crate::playback::PlayerState;

/// Presentation state for the fullscreen toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FullscreenButtonState {
    is_fullscreen: bool,
}

impl FullscreenButtonState {
    /// Create the initial state; the player starts windowed
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_fullscreen: false,
        }
    }

    /// Create state reflecting a player snapshot
    #[must_use]
    pub const fn from_snapshot(snapshot: &PlayerState) -> Self {
        Self {
            is_fullscreen: snapshot.is_fullscreen,
        }
    }

    /// Fold a player event into the state
    pub fn apply(&mut self, event: &PlayerEvent) {
        if let PlayerEvent::FullscreenChange { is_fullscreen } = event {
            self.is_fullscreen = *is_fullscreen;
        }
    }

    /// Whether the player is currently fullscreen
    #[must_use]
    pub const fn is_fullscreen(self) -> bool {
        self.is_fullscreen
    }

    /// Glyph to render
    #[must_use]
    pub const fn icon(self) -> Icon {
        if self.is_fullscreen {
            Icon::ExitFullscreen
        } else {
            Icon::Fullscreen
        }
    }

    /// Tooltip and accessible label
    #[must_use]
    pub const fn label(self) -> &'static str {
        if self.is_fullscreen {
            "Exit Fullscreen (F)"
        } else {
            "Fullscreen (F)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_windowed() {
        let state = FullscreenButtonState::new();
        assert!(!state.is_fullscreen());
        assert_eq!(state.icon(), Icon::Fullscreen);
        assert_eq!(state.label(), "Fullscreen (F)");
    }

    #[test]
    fn test_entering_fullscreen_flips_icon_and_label() {
        let mut state = FullscreenButtonState::new();
        state.apply(&PlayerEvent::FullscreenChange {
            is_fullscreen: true,
        });
        assert!(state.is_fullscreen());
        assert_eq!(state.icon(), Icon::ExitFullscreen);
        assert_eq!(state.label(), "Exit Fullscreen (F)");
    }

    #[test]
    fn test_leaving_fullscreen_restores_state() {
        let mut state = FullscreenButtonState::new();
        state.apply(&PlayerEvent::FullscreenChange {
            is_fullscreen: true,
        });
        state.apply(&PlayerEvent::FullscreenChange {
            is_fullscreen: false,
        });
        assert!(!state.is_fullscreen());
        assert_eq!(state.label(), "Fullscreen (F)");
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut state = FullscreenButtonState::new();
        state.apply(&PlayerEvent::FullscreenChange {
            is_fullscreen: true,
        });
        state.apply(&PlayerEvent::Play);
        state.apply(&PlayerEvent::Pause);
        state.apply(&PlayerEvent::Ended);
        state.apply(&PlayerEvent::SourceChange);
        state.apply(&PlayerEvent::TimeUpdate {
            current_time: 5.0,
            duration: 60.0,
        });
        state.apply(&PlayerEvent::LoadedMetadata { duration: 60.0 });
        assert!(state.is_fullscreen());
    }

    #[test]
    fn test_from_snapshot_mirrors_fullscreen_flag() {
        let snapshot = PlayerState {
            is_fullscreen: true,
            ..PlayerState::default()
        };
        let state = FullscreenButtonState::from_snapshot(&snapshot);
        assert!(state.is_fullscreen());
        assert_eq!(state.icon(), Icon::ExitFullscreen);

        let state = FullscreenButtonState::from_snapshot(&PlayerState::default());
        assert!(!state.is_fullscreen());
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let mut state = FullscreenButtonState::new();
        let event = PlayerEvent::FullscreenChange {
            is_fullscreen: true,
        };
        state.apply(&event);
        let after_first = state;
        state.apply(&event);
        assert_eq!(state, after_first);
    }
}
