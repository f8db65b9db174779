use crate::state::PlayerUiState;
use dioxus::prelude::*;

/// Elapsed / total time readout, e.g. "1:05 / 9:56".
#[component]
pub fn TimeDisplay() -> Element {
    let ui = use_context::<PlayerUiState>();
    let time = ui.time_display.read();

    rsx! {
        span {
            class: "time-display",
            "{time.text()}"
        }
    }
}
