use crate::state::PlayerUiState;
use dioxus::prelude::*;
use playhead_core::Player;
use std::sync::Arc;

/// Large overlay button in the middle of the media surface.
/// Hidden while playing; shows a replay icon after the source ends.
#[component]
pub fn CenterPlayButton() -> Element {
    let ui = use_context::<PlayerUiState>();
    let player = use_context::<Arc<Player>>();

    let state = *ui.center_play.read();

    rsx! {
        div {
            class: "{state.container_class()}",

            button {
                class: "center-play-button",
                title: "{state.label()}",
                aria_label: "{state.label()}",
                onclick: move |_| player.toggle_play(),

                span { dangerous_inner_html: state.icon().markup() }
            }
        }
    }
}
