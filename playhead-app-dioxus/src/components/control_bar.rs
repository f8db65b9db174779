use crate::components::{FullscreenButton, PlayButton, RemoteButton, TimeDisplay};
use dioxus::prelude::*;

/// Bottom control bar: transport controls on the left, route and window
/// controls on the right.
#[component]
pub fn ControlBar() -> Element {
    rsx! {
        div {
            class: "control-bar",

            PlayButton {}
            TimeDisplay {}
            div { class: "spacer" }
            RemoteButton {}
            FullscreenButton {}
        }
    }
}
