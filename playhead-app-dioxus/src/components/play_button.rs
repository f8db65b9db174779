use crate::state::PlayerUiState;
use dioxus::prelude::*;
use playhead_core::Player;
use std::sync::Arc;

/// Play/pause toggle for the control bar.
/// The icon always shows the action the next press performs, not the
/// current playback state.
#[component]
pub fn PlayButton() -> Element {
    let ui = use_context::<PlayerUiState>();
    let player = use_context::<Arc<Player>>();

    let state = *ui.play_button.read();

    rsx! {
        button {
            class: "control-button play-button",
            title: "{state.label()}",
            aria_label: "{state.label()}",
            onclick: move |_| player.toggle_play(),

            span { dangerous_inner_html: state.icon().markup() }
        }
    }
}
