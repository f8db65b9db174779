//! Presentation state machines for the player control widgets.
//!
//! Each widget keeps a small state struct that folds player events into the
//! icon, label, and class strings its view renders. The playback controls
//! can also be built straight from a [`PlayerState`] via `from_snapshot`,
//! for widgets that come up after playback already started; the remote
//! button instead seeds from its route in `new`. The structs are plain
//! data so widget behavior can be tested without mounting a UI.
//!
//! [`PlayerState`]: crate::playback::PlayerState

mod center_play_button;
mod fullscreen_button;
mod play_button;
mod remote_button;
mod time_display;

pub use center_play_button::CenterPlayButtonState;
pub use fullscreen_button::FullscreenButtonState;
pub use play_button::PlayButtonState;
pub use remote_button::RemoteButtonState;
pub use time_display::TimeDisplayState;
