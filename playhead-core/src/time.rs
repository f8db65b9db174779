//! Media time formatting utilities.
//!
//! This module renders playback positions and durations the way player
//! surfaces display them, with explicit handling for the junk values a
//! media pipeline can report before metadata is known.

/// Format a media timestamp in seconds as `m:ss`, or `h:mm:ss` once the
/// value reaches a full hour.
///
/// Non-finite and negative inputs render as `0:00` rather than erroring:
/// a player reports `NaN` durations before metadata loads, and a display
/// widget has nothing better to show for them.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    // Finite and positive at this point, so the cast cannot lose sign, and
    // media timestamps sit far below 2^52 so truncation only drops the
    // intended sub-second fraction.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_secs = seconds.floor() as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn test_format_time_minutes() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(125.0), "2:05");
    }

    #[test]
    fn test_format_time_half_track() {
        assert_eq!(format_time(90.0), "1:30");
    }

    #[test]
    fn test_format_time_truncates_fraction() {
        assert_eq!(format_time(59.9), "0:59");
    }

    #[test]
    fn test_format_time_hours() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3661.0), "1:01:01");
    }

    #[test]
    fn test_format_time_nan() {
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn test_format_time_negative() {
        assert_eq!(format_time(-4.2), "0:00");
    }

    #[test]
    fn test_format_time_infinite() {
        // Live streams report an infinite duration; show the neutral value.
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
