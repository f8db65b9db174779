use crate::state::PlayerUiState;
use dioxus::prelude::*;
use playhead_core::Player;
use std::sync::Arc;

/// Fullscreen toggle for the control bar.
#[component]
pub fn FullscreenButton() -> Element {
    let ui = use_context::<PlayerUiState>();
    let player = use_context::<Arc<Player>>();

    let state = *ui.fullscreen.read();

    rsx! {
        button {
            class: "control-button fullscreen-button",
            title: "{state.label()}",
            aria_label: "{state.label()}",
            onclick: move |_| player.toggle_fullscreen(),

            span { dangerous_inner_html: state.icon().markup() }
        }
    }
}
