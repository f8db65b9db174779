use crate::bridge::{use_player_bridge, use_remote_bridge};
use crate::components::{CenterPlayButton, ControlBar};
use crate::state::PlayerUiState;
use crate::theme_watcher::use_theme_watcher;
use crate::window_state::use_window_position_saver;
use dioxus::desktop::use_window;
use dioxus::prelude::*;
use playhead_core::{HotkeyConfig, Player, UiConfig, WindowBehaviorConfig};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Root application component.
/// Renders the media surface with the center play overlay and the control
/// bar, and wires player events into the control signals.
#[component]
pub fn App() -> Element {
    let player = use_context::<Arc<Player>>();
    let ui_config = use_context::<UiConfig>();
    let hotkeys = use_context::<HotkeyConfig>();
    let window_behavior = use_context::<WindowBehaviorConfig>();
    let cancel_token = use_context::<CancellationToken>();

    // Create control state with granular signals and share it with the
    // components below
    let ui = use_context_provider(|| PlayerUiState::new(&player.media_surface()));

    // Bridge player and remote route events to Dioxus signals
    use_player_bridge(player.clone(), ui);
    use_remote_bridge(player.media_surface(), ui);

    // Hot-reloadable CSS from ~/.config/playhead/theme.css
    let css = use_theme_watcher(cancel_token.clone());

    // Persist window position while the app runs
    use_window_position_saver(window_behavior.save_position, cancel_token);

    // Mirror fullscreen state onto the OS window
    let window = use_window();
    let fullscreen = ui.fullscreen;
    use_effect(move || {
        let active = fullscreen.read().is_fullscreen();
        window.set_fullscreen(active);
    });

    // Keyboard shortcuts; the root div holds focus so keydown reaches us
    let on_key_down = {
        let player = player.clone();
        move |event: KeyboardEvent| {
            if let Key::Character(pressed) = event.key() {
                if pressed.eq_ignore_ascii_case(&hotkeys.toggle_play) {
                    player.toggle_play();
                } else if pressed.eq_ignore_ascii_case(&hotkeys.toggle_fullscreen) {
                    player.toggle_fullscreen();
                }
            }
        }
    };

    let container_style = format!(
        "--accent-color: {}; --background-color: {};",
        ui_config.accent_color, ui_config.background_color
    );

    let source_title = ui.source_title.read();

    rsx! {
        document::Style { "{css}" }

        div {
            class: "player",
            style: "{container_style}",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_key_down,

            div {
                class: "media-surface",

                if let Some(title) = source_title.as_ref() {
                    span { class: "media-title", "{title}" }
                }

                CenterPlayButton {}
            }

            ControlBar {}
        }
    }
}
