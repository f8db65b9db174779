#![cfg_attr(feature = "bundle", windows_subsystem = "windows")]
mod app;
mod bridge;
mod components;
mod state;
mod theme_watcher;
mod window_state;

use crate::app::App;
use crate::window_state::WindowState;
use dioxus::desktop::tao::dpi::PhysicalPosition;
use dioxus::desktop::{LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use playhead_core::{
    CONFIG_TEMPLATE, Config, CoreError, MediaSurface, Player, PlayerBackend, PlayerConfig,
    PlayerEvent, TomlParseError, format_time,
};
use playhead_sim::{SimPlayer, SimRemotePlayback};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const APP_NAME: &str = "Playhead";

#[allow(clippy::too_many_lines)]
fn main() {
    // Tracing wants the file-logging flag before the config proper loads
    let file_logging_enabled = check_file_logging_enabled();
    init_tracing(file_logging_enabled);

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(CoreError::ConfigNotFound { path }) => {
            // A template was just written. The built-in defaults are
            // playable, so point the user at it and keep going.
            show_new_config_dialog(&path);
            Config::default()
        }
        Err(CoreError::ConfigParseError(parse_error)) => {
            // Broken TOML gets a fix-or-reset dialog, then we bail
            show_config_parse_error_dialog(&parse_error, &Config::config_path());
            std::process::exit(1);
        }
        Err(e) => {
            error!("{e}");
            show_generic_error_dialog(&e.to_string());
            std::process::exit(1);
        }
    };

    // The media pipeline and event logger run on a dedicated runtime;
    // the webview keeps the main thread
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    };

    // Probe for a remote playback route; a surface without one keeps the
    // remote button hidden
    let surface = match create_remote_route(&config) {
        Some(route) => MediaSurface::with_remote_playback(route),
        None => MediaSurface::new(),
    };

    let player = Player::new(surface);

    // One token fans shutdown out to every background task
    let cancel_token = CancellationToken::new();

    let ctrlc_token = cancel_token.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Ctrl+C received, shutting down");
        ctrlc_token.cancel();
    }) {
        error!("Failed to set Ctrl+C handler: {}", e);
    }

    runtime.spawn(start_media_pipeline(
        config.player.clone(),
        player.clone(),
        cancel_token.clone(),
    ));
    runtime.spawn(log_player_events(player.clone()));

    let saved_position = if config.window.save_position {
        WindowState::load()
    } else {
        None
    };

    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(
            f64::from(config.ui.window.width),
            f64::from(config.ui.window.height),
        ));

    // Saved position wins over the configured start position; negative
    // start coordinates mean "let the OS place it"
    let window = if let Some(state) = saved_position {
        info!("Restoring window position: ({}, {})", state.x, state.y);
        window.with_position(PhysicalPosition::new(state.x, state.y))
    } else if config.ui.window.start_x >= 0 && config.ui.window.start_y >= 0 {
        window.with_position(PhysicalPosition::new(
            config.ui.window.start_x,
            config.ui.window.start_y,
        ))
    } else {
        window
    };

    // CSS comes from the theme watcher inside the App component, so the
    // webview config carries no stylesheet of its own
    let dioxus_config = dioxus::desktop::Config::default()
        .with_window(window)
        .with_disable_context_menu(true);

    // Everything the component tree needs rides in via context
    dioxus::LaunchBuilder::desktop()
        .with_cfg(dioxus_config)
        .with_context(player)
        .with_context(config.ui)
        .with_context(config.hotkeys)
        .with_context(config.window)
        .with_context(cancel_token)
        .launch(app);
}

/// Document shell: window title plus the application root
fn app() -> Element {
    rsx! {
        document::Title { "{APP_NAME}" },
        App {}
    }
}

/// Build the remote playback route the media surface offers, if any
fn create_remote_route(config: &Config) -> Option<Arc<SimRemotePlayback>> {
    if !config.remote.enabled {
        info!("Remote playback disabled in config");
        return None;
    }

    info!(
        "Offering {} remote playback route",
        config.remote.technology
    );
    Some(SimRemotePlayback::new(config.remote.technology.clone()))
}

/// Run the simulated media pipeline until shutdown
async fn start_media_pipeline(
    config: PlayerConfig,
    player: Arc<Player>,
    cancel_token: CancellationToken,
) {
    let pipeline = Arc::new(SimPlayer::new(&config, player, Some(cancel_token)));
    info!("Starting {} media pipeline", pipeline.name());
    let handle = pipeline.start();
    let _ = handle.await;
}

/// Log all player events to the console
async fn log_player_events(player: Arc<Player>) {
    let mut rx = player.subscribe();

    loop {
        match rx.recv().await {
            Ok(event) => match &event {
                PlayerEvent::Play => {
                    info!("Playback started");
                }
                PlayerEvent::Pause => {
                    info!("Playback paused");
                }
                PlayerEvent::Ended => {
                    info!("Playback ended");
                }
                PlayerEvent::SourceChange => {
                    info!("Source changed");
                }
                PlayerEvent::FullscreenChange { is_fullscreen } => {
                    info!("Fullscreen: {}", is_fullscreen);
                }
                PlayerEvent::LoadedMetadata { duration } => {
                    info!("Metadata loaded: duration {}", format_time(*duration));
                }
                PlayerEvent::TimeUpdate { .. } => {
                    // Position ticks are too chatty for the console
                }
            },
            Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                info!("Player event channel closed");
                break;
            }
            Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                info!("Missed {} player events", n);
            }
        }
    }
}

/// First-run notice pointing the user at the fresh config template
fn show_new_config_dialog(config_path: &Path) {
    let message = "A configuration file has been created.\n\n\
        Edit it to set up your playlist, hotkeys, and remote playback,\n\
        then restart the app. The built-in defaults are used for this run.";

    let result = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Playhead - Configuration Created")
        .set_description(message)
        .set_buttons(MessageButtons::OkCancelCustom(
            "Open Config".into(),
            "Continue".into(),
        ))
        .show();

    if matches!(result, MessageDialogResult::Custom(ref s) if s == "Open Config") {
        open_config_file(config_path);
    }
}

/// Open the config file in the default editor
fn open_config_file(config_path: &Path) {
    if let Err(e) = open::that(config_path) {
        error!("Failed to open config file: {e}");
    }
}

/// Fix-or-reset dialog for a config file that fails to parse
fn show_config_parse_error_dialog(parse_error: &TomlParseError, config_path: &Path) {
    let message = format!(
        "The configuration file could not be parsed.\n\n\
        {parse_error}\n\n\
        Open it to fix the syntax, or reset it to the default template."
    );

    let result = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Playhead - Configuration Error")
        .set_description(&message)
        .set_buttons(MessageButtons::OkCancelCustom(
            "Open Config".into(),
            "Reset Config".into(),
        ))
        .show();

    match result {
        MessageDialogResult::Custom(button) if button == "Open Config" => {
            open_config_file(config_path);
        }
        MessageDialogResult::Custom(button) if button == "Reset Config" => {
            if let Err(e) = reset_config_to_template(config_path) {
                error!("Failed to reset config file: {e}");
                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Playhead - Reset Failed")
                    .set_description(format!("Failed to reset configuration:\n{e}"))
                    .set_buttons(MessageButtons::Ok)
                    .show();
            } else {
                MessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title("Playhead - Configuration Reset")
                    .set_description(
                        "A fresh configuration template has been written.\n\n\
                        Edit it and restart the app.",
                    )
                    .set_buttons(MessageButtons::Ok)
                    .show();
                open_config_file(config_path);
            }
        }
        _ => {
            // Dialog dismissed; fall through to the exit below
        }
    }

    std::process::exit(1);
}

/// Overwrite the config file with the commented starter template
fn reset_config_to_template(config_path: &Path) -> std::io::Result<()> {
    std::fs::write(config_path, CONFIG_TEMPLATE)
}

fn show_generic_error_dialog(error_message: &str) {
    let message = format!(
        "Something went wrong:\n\n{error_message}\n\n\
        Check the configuration file, or report this if it persists."
    );

    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Playhead - Error")
        .set_description(&message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Peek at `logging.file_enabled` before the config proper loads, so
/// tracing can come up first. A missing or unparsable file reads as off.
fn check_file_logging_enabled() -> bool {
    // Parse only the one field; the full Config would reject files the
    // real loader wants to show a dialog for
    #[derive(serde::Deserialize)]
    struct PartialConfig {
        #[serde(default)]
        logging: PartialLoggingConfig,
    }
    #[derive(serde::Deserialize, Default)]
    struct PartialLoggingConfig {
        #[serde(default)]
        file_enabled: bool,
    }

    let config_path = Config::config_path();
    let Ok(content) = std::fs::read_to_string(&config_path) else {
        return false;
    };

    toml::from_str::<PartialConfig>(&content)
        .map(|c| c.logging.file_enabled)
        .unwrap_or(false)
}

/// Console subscriber, with a plain-text file layer when configured
fn init_tracing(file_logging_enabled: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer();

    if file_logging_enabled {
        let log_path = playhead_core::log_file_path();

        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match File::create(&log_path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .with(file_layer)
                    .init();

                return;
            }
            Err(e) => {
                eprintln!("Failed to create log file at {}: {e}", log_path.display());
            }
        }
    }

    // Console only
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
