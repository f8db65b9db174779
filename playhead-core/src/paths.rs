//! Path constants for configuration and state files.

use std::path::PathBuf;

/// The name of the configuration directory under ~/.config/
pub const CONFIG_DIR_NAME: &str = "playhead";

/// The name of the main configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// The name of the hot-reloadable stylesheet
pub const THEME_FILE_NAME: &str = "theme.css";

/// The name of the log file written when file logging is enabled
pub const LOG_FILE_NAME: &str = "playhead.log";

/// The name of the window state cache file (prefixed with . for hidden)
pub const WINDOW_STATE_FILE_NAME: &str = ".window_state.json";

/// Get the configuration directory path (~/.config/playhead/)
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(CONFIG_DIR_NAME)
}

/// Get the config file path (~/.config/playhead/config.toml)
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Get the theme stylesheet path (`~/.config/playhead/theme.css`)
#[must_use]
pub fn theme_path() -> PathBuf {
    config_dir().join(THEME_FILE_NAME)
}

/// Get the log file path (`~/.config/playhead/playhead.log`)
#[must_use]
pub fn log_file_path() -> PathBuf {
    config_dir().join(LOG_FILE_NAME)
}

/// Get the window state file path (`~/.config/playhead/.window_state.json`)
#[must_use]
pub fn window_state_path() -> PathBuf {
    config_dir().join(WINDOW_STATE_FILE_NAME)
}
