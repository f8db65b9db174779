//! Player theme loading and hot-reload CSS injection.
//!
//! On first run the embedded stylesheet is copied to the user's config
//! directory. At runtime the theme file is watched for changes and a
//! `Signal<String>` carries the current CSS, so saving the file restyles
//! the player without a restart.

use dioxus::prelude::*;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc as tokio_mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Theme file handling errors
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to initialize file watcher: {0}")]
    WatcherError(#[from] notify::Error),
}

/// Stylesheet compiled into the binary, used as template and fallback
const DEFAULT_CSS: &str = include_str!("../assets/default_theme.css");

/// Debounce window for editor save bursts
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Initialize the theme file, copying the embedded stylesheet if it does
/// not exist yet. Returns the CSS content to use.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created or the file
/// cannot be read or written.
pub fn initialize_theme() -> Result<String, ThemeError> {
    let theme_path = playhead_core::theme_path();

    if theme_path.exists() {
        info!("Loading theme stylesheet from {:?}", theme_path);
        return Ok(fs::read_to_string(&theme_path)?);
    }

    info!(
        "Theme file not found, creating from template at {:?}",
        theme_path
    );
    fs::create_dir_all(playhead_core::config_dir())?;
    fs::write(&theme_path, DEFAULT_CSS)?;

    Ok(DEFAULT_CSS.to_string())
}

/// Read the theme file, falling back to the embedded stylesheet.
#[must_use]
pub fn load_theme_css() -> String {
    let theme_path = playhead_core::theme_path();

    match fs::read_to_string(&theme_path) {
        Ok(css) => css,
        Err(e) => {
            warn!("Failed to read theme file, using embedded CSS: {}", e);
            DEFAULT_CSS.to_string()
        }
    }
}

/// Hook returning the current theme CSS as a signal.
///
/// Sets the theme file up on first run, then watches it and pushes each
/// change into the signal; the style element rendered from it restyles
/// the player on the next render.
#[must_use]
pub fn use_theme_watcher(cancel_token: CancellationToken) -> Signal<String> {
    let mut css_content = use_signal(|| {
        initialize_theme().unwrap_or_else(|e| {
            error!("Failed to initialize theme: {}", e);
            DEFAULT_CSS.to_string()
        })
    });

    use_effect(move || {
        let cancel_token = cancel_token.clone();

        spawn(async move {
            let theme_path = playhead_core::theme_path();

            // Channel from the watcher's sync callback into async land
            let (tx, mut rx) = tokio_mpsc::channel::<()>(16);
            let tx = Arc::new(tx);

            let tx_clone = Arc::clone(&tx);
            let mut debouncer =
                match new_debouncer(DEBOUNCE, move |res: DebounceEventResult| {
                    if let Ok(events) = res {
                        for _ in events {
                            // blocking_send: we are in a sync callback
                            let _ = tx_clone.blocking_send(());
                        }
                    }
                }) {
                    Ok(d) => d,
                    Err(e) => {
                        error!("Failed to create file watcher: {}", e);
                        return;
                    }
                };

            // Watch the parent directory; watching the file itself breaks
            // with editors that replace it on save
            let watch_path = theme_path
                .parent()
                .map_or_else(|| theme_path.clone(), PathBuf::from);

            if let Err(e) = debouncer
                .watcher()
                .watch(&watch_path, RecursiveMode::NonRecursive)
            {
                error!("Failed to watch theme directory: {}", e);
                return;
            }

            info!("Watching theme file for changes: {:?}", theme_path);

            loop {
                tokio::select! {
                    () = cancel_token.cancelled() => {
                        info!("Theme watcher shutting down");
                        break;
                    }
                    Some(()) = rx.recv() => {
                        info!("Theme file changed, restyling");
                        css_content.set(load_theme_css());
                    }
                }
            }

            drop(debouncer);
        });
    });

    css_content
}
