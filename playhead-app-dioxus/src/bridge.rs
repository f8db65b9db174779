use crate::state::PlayerUiState;
use dioxus::prelude::*;
use playhead_core::{MediaSurface, Player, PlayerEvent};
use std::sync::Arc;
use tracing::info;

const LOG_TARGET: &str = "playhead::bridge";

/// Bridge `Player` events to Dioxus signals.
/// This function spawns an async task that seeds the controls from the
/// current player state, then listens to player events and updates the
/// control state signals accordingly.
pub fn use_player_bridge(player: Arc<Player>, ui: PlayerUiState) {
    use_future(move || {
        let player = player.clone();
        async move {
            let mut rx = player.subscribe();

            // The pipeline may have loaded a source before this
            // subscription existed. Subscribe first, then snapshot: an
            // event landing in between is reflected in both, and the
            // controls fold a repeated event without changing state.
            let mut ui = ui;
            ui.apply_snapshot(&player.state().await);

            loop {
                match rx.recv().await {
                    Ok(event) => {
                        handle_player_event(&player, event, ui).await;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        info!(target: LOG_TARGET, "Player event channel closed");
                        break;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        info!(target: LOG_TARGET, "Missed {} player events", n);
                    }
                }
            }
        }
    });
}

/// Bridge remote playback route events to the remote button signal.
/// Does nothing when the surface has no remote route, leaving the button
/// in its unsupported (hidden) state.
pub fn use_remote_bridge(surface: MediaSurface, ui: PlayerUiState) {
    use_future(move || {
        let surface = surface.clone();
        async move {
            let Some(route) = surface.remote_playback() else {
                return;
            };
            let mut ui = ui;
            let mut rx = route.subscribe();

            loop {
                match rx.recv().await {
                    Ok(event) => {
                        ui.apply_remote_event(event);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        info!(target: LOG_TARGET, "Remote event channel closed");
                        break;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        info!(target: LOG_TARGET, "Missed {} remote events", n);
                    }
                }
            }
        }
    });
}

async fn handle_player_event(player: &Arc<Player>, event: PlayerEvent, mut ui: PlayerUiState) {
    // The source change event carries no payload, so fetch the new title
    // from player state.
    if matches!(event, PlayerEvent::SourceChange) {
        let title = player.state().await.source.map(|source| source.title);
        ui.set_source_title(title);
    }
    ui.apply_player_event(&event);
}
