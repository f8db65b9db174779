use crate::event::PlayerEvent;
use crate::playback::PlayerState;
use crate::time::format_time;

/// Presentation state for the elapsed / total time readout.
///
/// Position updates refresh both halves; a metadata load refreshes only
/// the total, since the playhead has not moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDisplayState {
    current_text: String,
    duration_text: String,
}

impl TimeDisplayState {
    /// Create the initial state; both halves read `0:00`
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_text: "0:00".to_string(),
            duration_text: "0:00".to_string(),
        }
    }

    /// Create state with both halves formatted from a player snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &PlayerState) -> Self {
        Self {
            current_text: format_time(snapshot.current_time),
            duration_text: format_time(snapshot.duration),
        }
    }

    /// Fold a player event into the state
    pub fn apply(&mut self, event: &PlayerEvent) {
        match *event {
            PlayerEvent::TimeUpdate {
                current_time,
                duration,
            } => {
                self.current_text = format_time(current_time);
                self.duration_text = format_time(duration);
            }
            PlayerEvent::LoadedMetadata { duration } => {
                self.duration_text = format_time(duration);
            }
            _ => {}
        }
    }

    /// Elapsed time text
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// Total duration text
    #[must_use]
    pub fn duration_text(&self) -> &str {
        &self.duration_text
    }

    /// Full readout, e.g. `1:05 / 2:05`
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} / {}", self.current_text, self.duration_text)
    }
}

impl Default for TimeDisplayState {
    fn default() -> Self {
        Self::new()
    }
}
