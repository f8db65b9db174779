use crate::error::{CoreError, Result};
use crate::playback::MediaSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub window: WindowBehaviorConfig,
    #[serde(default)]
    pub hotkeys: HotkeyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Playlist entries, played in order
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
    /// Start playing as soon as the first source loads
    #[serde(default)]
    pub autoplay: bool,
    /// Milliseconds between position updates while playing
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Move to the next playlist entry when the current one ends
    #[serde(default = "default_true")]
    pub auto_advance: bool,
    /// Milliseconds a source takes to report metadata after loading
    #[serde(default = "default_metadata_delay")]
    pub metadata_delay_ms: u64,
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            title: "Big Buck Bunny".to_string(),
            url: "media/bunny.mp4".to_string(),
            duration_secs: 596.0,
        },
        SourceConfig {
            title: "Sintel".to_string(),
            url: "media/sintel.mp4".to_string(),
            duration_secs: 888.0,
        },
    ]
}

const fn default_tick_interval() -> u64 {
    250
}

const fn default_true() -> bool {
    true
}

const fn default_metadata_delay() -> u64 {
    400
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            autoplay: false,
            tick_interval_ms: default_tick_interval(),
            auto_advance: true,
            metadata_delay_ms: default_metadata_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub title: String,
    pub url: String,
    /// Nominal media duration in seconds
    pub duration_secs: f64,
}

impl SourceConfig {
    /// Convert into the media source the player consumes
    #[must_use]
    pub fn to_media_source(&self) -> MediaSource {
        MediaSource::new(self.title.clone(), self.url.clone(), self.duration_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Offer a remote playback route on the media surface
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Technology name shown on the remote button
    #[serde(default = "default_technology")]
    pub technology: String,
}

fn default_technology() -> String {
    "AirPlay".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            technology: default_technology(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_accent_color() -> String {
    "#3EA6FF".to_string()
}

fn default_background_color() -> String {
    "#000000".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            background_color: default_background_color(),
            window: WindowConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
    #[serde(default = "default_window_pos")]
    pub start_x: i32,
    #[serde(default = "default_window_pos")]
    pub start_y: i32,
}

const fn default_window_width() -> u32 {
    960
}

const fn default_window_height() -> u32 {
    540
}

const fn default_window_pos() -> i32 {
    -1 // centered
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            start_x: default_window_pos(),
            start_y: default_window_pos(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Also write logs to ~/.config/playhead/playhead.log
    #[serde(default)]
    pub file_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowBehaviorConfig {
    #[serde(default = "default_true")]
    pub save_position: bool,
}

impl Default for WindowBehaviorConfig {
    fn default() -> Self {
        Self {
            save_position: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    #[serde(default = "default_toggle_play")]
    pub toggle_play: String,
    #[serde(default = "default_toggle_fullscreen")]
    pub toggle_fullscreen: String,
}

fn default_toggle_play() -> String {
    "K".to_string()
}

fn default_toggle_fullscreen() -> String {
    "F".to_string()
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            toggle_play: default_toggle_play(),
            toggle_fullscreen: default_toggle_fullscreen(),
        }
    }
}

impl Config {
    /// Get the configuration directory path (~/.config/playhead/)
    #[must_use]
    pub fn config_dir() -> PathBuf {
        crate::paths::config_dir()
    }

    /// Get the config file path (~/.config/playhead/config.toml)
    #[must_use]
    pub fn config_path() -> PathBuf {
        crate::paths::config_path()
    }

    /// Load config from file or create template on first run
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if a
    /// value fails validation.
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            // Create config directory if it doesn't exist
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }

            // Write template config
            fs::write(&config_path, CONFIG_TEMPLATE)?;

            return Err(CoreError::ConfigNotFound { path: config_path });
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Check value ranges that serde cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if an interval is zero or a source duration is not a
    /// non-negative finite number.
    pub fn validate(&self) -> Result<()> {
        if self.player.tick_interval_ms == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "player.tick_interval_ms must be greater than zero".to_string(),
            });
        }
        for (index, source) in self.player.sources.iter().enumerate() {
            if !source.duration_secs.is_finite() || source.duration_secs < 0.0 {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "player.sources[{index}] ({}) duration_secs must be a non-negative number",
                        source.title
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Commented starter config written on first run
pub const CONFIG_TEMPLATE: &str = r##"# Playhead Configuration
# ~/.config/playhead/config.toml

[player]
# Start playing as soon as the first source loads
autoplay = false
# Milliseconds between position updates while playing
tick_interval_ms = 250
# Move to the next playlist entry when the current one ends
auto_advance = true
# Milliseconds a source takes to report metadata after loading
metadata_delay_ms = 400

# Playlist entries are played in order
[[player.sources]]
title = "Big Buck Bunny"
url = "media/bunny.mp4"
duration_secs = 596.0

[[player.sources]]
title = "Sintel"
url = "media/sintel.mp4"
duration_secs = 888.0

[remote]
# Offer a remote playback route on the media surface
enabled = true
technology = "AirPlay"

[ui]
accent_color = "#3EA6FF"
background_color = "#000000"

[ui.window]
width = 960
height = 540
start_x = -1  # -1 = centered
start_y = -1

[logging]
# Also write logs to ~/.config/playhead/playhead.log
file_enabled = false

[window]
# Window position persistence
save_position = true

[hotkeys]
# Single keys; letters are case-insensitive
toggle_play = "K"
toggle_fullscreen = "F"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_and_validates() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.player.sources.len(), 2);
        assert_eq!(config.remote.technology, "AirPlay");
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.player.tick_interval_ms, 250);
        assert!(config.player.auto_advance);
        assert!(!config.player.autoplay);
        assert!(config.remote.enabled);
        assert_eq!(config.hotkeys.toggle_play, "K");
        assert!(config.window.save_position);
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config: Config = toml::from_str("[player]\ntick_interval_ms = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_source_duration_rejected() {
        let toml_str = r#"
[[player.sources]]
title = "Broken"
url = "media/broken.mp4"
duration_secs = -1.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_source_config_to_media_source() {
        let source = SourceConfig {
            title: "Clip".to_string(),
            url: "media/clip.mp4".to_string(),
            duration_secs: 42.0,
        };
        let media = source.to_media_source();
        assert_eq!(media.title, "Clip");
        assert_eq!(media.duration, 42.0);
    }
}
