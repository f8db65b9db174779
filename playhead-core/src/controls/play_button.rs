use crate::event::PlayerEvent;
use crate::icon::Icon;
use crate::playback::PlayerState;

/// Presentation state for the play/pause button in the control bar.
///
/// Shows the pause glyph while media plays, and the play glyph whenever
/// playback stops for any reason: an explicit pause, the end of the media,
/// or a source swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayButtonState {
    icon: Icon,
}

impl PlayButtonState {
    /// Create the initial state; the player starts paused
    #[must_use]
    pub const fn new() -> Self {
        Self { icon: Icon::Play }
    }

    /// Create state reflecting a player snapshot, for a widget that mounts
    /// while playback is already underway
    #[must_use]
    pub const fn from_snapshot(snapshot: &PlayerState) -> Self {
        Self {
            icon: if snapshot.is_playing() {
                Icon::Pause
            } else {
                Icon::Play
            },
        }
    }

    /// Fold a player event into the state
    pub fn apply(&mut self, event: &PlayerEvent) {
        match event {
            PlayerEvent::Play => self.icon = Icon::Pause,
            PlayerEvent::Pause | PlayerEvent::Ended | PlayerEvent::SourceChange => {
                self.icon = Icon::Play;
            }
            _ => {}
        }
    }

    /// Glyph to render
    #[must_use]
    pub const fn icon(self) -> Icon {
        self.icon
    }

    /// Tooltip and accessible label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.icon {
            Icon::Pause => "Pause (K)",
            _ => "Play (K)",
        }
    }
}

impl Default for PlayButtonState {
    fn default() -> Self {
        Self::new()
    }
}
