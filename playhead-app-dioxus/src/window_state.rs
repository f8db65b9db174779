//! Remembers where the player window sat so the next launch can put it
//! back there.

use dioxus::desktop::use_window;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// How often to check whether the window has moved
const SAVE_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Outer position of the player window. Size is not persisted; it comes
/// from `[ui.window]` in the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub x: i32,
    pub y: i32,
}

impl WindowState {
    /// Read the persisted position, if a usable state file exists.
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = playhead_core::window_state_path();

        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => {
                    info!("Loaded window state from {:?}", path);
                    Some(state)
                }
                Err(e) => {
                    warn!("Failed to parse window state: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read window state file: {}", e);
                None
            }
        }
    }

    /// Write the position out. Best effort: failures are logged, never
    /// surfaced.
    pub fn save(&self) {
        let path = playhead_core::window_state_path();

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create window state directory: {}", e);
            return;
        }

        match serde_json::to_string_pretty(self) {
            Ok(content) => {
                if let Err(e) = fs::write(&path, content) {
                    warn!("Failed to write window state: {}", e);
                } else {
                    info!("Saved window state to {:?}", path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize window state: {}", e);
            }
        }
    }
}

/// Dioxus hook that periodically saves the window position so the next
/// launch can restore it. Does nothing when `enabled` is false.
pub fn use_window_position_saver(enabled: bool, cancel_token: CancellationToken) {
    let window = use_window();

    use_future(move || {
        let window = window.clone();
        let cancel_token = cancel_token.clone();
        async move {
            if !enabled {
                return;
            }

            let mut last_saved = WindowState::load();

            loop {
                tokio::select! {
                    () = cancel_token.cancelled() => break,
                    () = tokio::time::sleep(SAVE_POLL_INTERVAL) => {}
                }

                let Ok(position) = window.outer_position() else {
                    continue;
                };

                let state = WindowState {
                    x: position.x,
                    y: position.y,
                };
                if last_saved.as_ref() != Some(&state) {
                    state.save();
                    last_saved = Some(state);
                }
            }
        }
    });
}
