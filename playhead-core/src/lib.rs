pub mod backend;
pub mod config;
pub mod controls;
pub mod error;
pub mod event;
pub mod icon;
pub mod paths;
pub mod playback;
pub mod player;
pub mod remote;
pub mod time;

pub use backend::PlayerBackend;
pub use config::{
    Config, HotkeyConfig, LoggingConfig, PlayerConfig, RemoteConfig, SourceConfig, UiConfig,
    WindowBehaviorConfig, WindowConfig, CONFIG_TEMPLATE,
};
pub use controls::{
    CenterPlayButtonState, FullscreenButtonState, PlayButtonState, RemoteButtonState,
    TimeDisplayState,
};

/// Re-export toml error type for config parsing error handling
pub use toml::de::Error as TomlParseError;
pub use error::CoreError;
pub use event::{PlayerCommand, PlayerEvent};
pub use icon::Icon;
pub use paths::{
    config_dir, log_file_path, theme_path, window_state_path, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    LOG_FILE_NAME, THEME_FILE_NAME, WINDOW_STATE_FILE_NAME,
};
pub use playback::{MediaSource, PlaybackPhase, PlayerState};
pub use player::Player;
pub use remote::{MediaSurface, RemoteEvent, RemotePlayback};
pub use time::format_time;
