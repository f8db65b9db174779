use crate::state::PlayerUiState;
use dioxus::prelude::*;

/// Remote playback route picker (AirPlay-style).
/// Hidden entirely when the media surface has no remote route; highlighted
/// while a route is connected.
#[component]
pub fn RemoteButton() -> Element {
    let ui = use_context::<PlayerUiState>();

    let (class, label, markup) = {
        let state = ui.remote_button.read();
        (state.class(), state.label(), state.icon().markup())
    };

    rsx! {
        button {
            class: "control-button {class}",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| ui.remote_button.peek().show_picker(),

            span { dangerous_inner_html: markup }
        }
    }
}
