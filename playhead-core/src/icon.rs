//! Inline SVG icons for the control widgets.
//!
//! Icons are 24x24 single-path glyphs filled with `currentColor`, so a
//! stylesheet can recolor them without touching the markup.

use const_format::concatcp;
use std::fmt;

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d=""#;
const SVG_CLOSE: &str = r#""/></svg>"#;

const PLAY: &str = concatcp!(SVG_OPEN, "M8 5v14l11-7z", SVG_CLOSE);
const PAUSE: &str = concatcp!(SVG_OPEN, "M6 19h4V5H6v14zm8-14v14h4V5h-4z", SVG_CLOSE);
const REPLAY: &str = concatcp!(
    SVG_OPEN,
    "M12 5V1L7 6l5 5V7c3.31 0 6 2.69 6 6s-2.69 6-6 6-6-2.69-6-6H4c0 4.42 3.58 8 8 8s8-3.58 8-8-3.58-8-8-8z",
    SVG_CLOSE
);
const FULLSCREEN: &str = concatcp!(
    SVG_OPEN,
    "M7 14H5v5h5v-2H7v-3zm-2-4h2V7h3V5H5v5zm12 7h-3v2h5v-5h-2v3zM14 5v2h3v3h2V5h-5z",
    SVG_CLOSE
);
const EXIT_FULLSCREEN: &str = concatcp!(
    SVG_OPEN,
    "M5 16h3v3h2v-5H5v2zm3-8H5v2h5V5H8v3zm6 11h2v-3h3v-2h-5v5zm2-11V5h-2v5h5V8h-3z",
    SVG_CLOSE
);
const REMOTE: &str = concatcp!(
    SVG_OPEN,
    "M6 22h12l-6-6zM21 3H3c-1.1 0-2 .9-2 2v12c0 1.1.9 2 2 2h4v-2H3V5h18v12h-4v2h4c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2z",
    SVG_CLOSE
);

/// A glyph one of the control widgets can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Play,
    Pause,
    Replay,
    Fullscreen,
    ExitFullscreen,
    Remote,
}

impl Icon {
    /// Complete `<svg>` markup for this glyph.
    #[must_use]
    pub const fn markup(self) -> &'static str {
        match self {
            Self::Play => PLAY,
            Self::Pause => PAUSE,
            Self::Replay => REPLAY,
            Self::Fullscreen => FULLSCREEN,
            Self::ExitFullscreen => EXIT_FULLSCREEN,
            Self::Remote => REMOTE,
        }
    }

    /// Stable identifier, usable as a CSS class suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Replay => "replay",
            Self::Fullscreen => "fullscreen",
            Self::ExitFullscreen => "exit-fullscreen",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_is_complete_svg() {
        for icon in [
            Icon::Play,
            Icon::Pause,
            Icon::Replay,
            Icon::Fullscreen,
            Icon::ExitFullscreen,
            Icon::Remote,
        ] {
            assert!(icon.markup().starts_with("<svg"));
            assert!(icon.markup().ends_with("</svg>"));
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        assert_ne!(Icon::Play.markup(), Icon::Pause.markup());
        assert_ne!(Icon::Play.markup(), Icon::Replay.markup());
        assert_ne!(Icon::Fullscreen.markup(), Icon::ExitFullscreen.markup());
    }

    #[test]
    fn test_name_display() {
        assert_eq!(Icon::ExitFullscreen.to_string(), "exit-fullscreen");
    }
}
