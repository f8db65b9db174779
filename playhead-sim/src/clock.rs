//! Deterministic playhead arithmetic for the simulated pipeline.
//!
//! The clock owns no timers; callers decide when a tick elapses and the
//! clock just reports where the playhead lands. That keeps the timing
//! logic testable without running an executor.

use std::time::Duration;

/// Outcome of advancing the playhead by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// The playhead moved and more media remains
    Advanced { position: f64 },
    /// The playhead hit the end of the media
    Finished { position: f64 },
}

/// Playhead position tracker for one media source.
#[derive(Debug, Clone, PartialEq)]
pub struct SimClock {
    position: f64,
    duration: f64,
    step: f64,
}

impl SimClock {
    /// Create a clock for media of the given duration, advancing by
    /// `tick_interval` per tick
    #[must_use]
    pub fn new(duration: f64, tick_interval: Duration) -> Self {
        Self {
            position: 0.0,
            duration,
            step: tick_interval.as_secs_f64(),
        }
    }

    /// Current playhead position in seconds
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Media duration in seconds
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Move the playhead forward by one tick, clamping at the end
    pub fn advance(&mut self) -> Tick {
        let next = self.position + self.step;
        if next >= self.duration {
            self.position = self.duration;
            Tick::Finished {
                position: self.duration,
            }
        } else {
            self.position = next;
            Tick::Advanced { position: next }
        }
    }

    /// Send the playhead back to the start, for replay
    pub fn rewind(&mut self) {
        self.position = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_steps_by_tick_interval() {
        let mut clock = SimClock::new(10.0, Duration::from_millis(250));
        assert_eq!(clock.advance(), Tick::Advanced { position: 0.25 });
        assert_eq!(clock.advance(), Tick::Advanced { position: 0.5 });
        assert_eq!(clock.position(), 0.5);
    }

    #[test]
    fn test_advance_clamps_at_duration() {
        let mut clock = SimClock::new(1.0, Duration::from_millis(400));
        assert_eq!(clock.advance(), Tick::Advanced { position: 0.4 });
        assert_eq!(clock.advance(), Tick::Advanced { position: 0.8 });
        assert_eq!(clock.advance(), Tick::Finished { position: 1.0 });
        assert_eq!(clock.position(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut clock = SimClock::new(0.0, Duration::from_millis(250));
        assert_eq!(clock.advance(), Tick::Finished { position: 0.0 });
    }

    #[test]
    fn test_rewind_restarts_from_zero() {
        let mut clock = SimClock::new(1.0, Duration::from_secs(1));
        let _ = clock.advance();
        clock.rewind();
        assert_eq!(clock.position(), 0.0);
        assert_eq!(clock.advance(), Tick::Finished { position: 1.0 });
    }
}
