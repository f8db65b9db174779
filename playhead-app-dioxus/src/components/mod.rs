mod center_play_button;
mod control_bar;
mod fullscreen_button;
mod play_button;
mod remote_button;
mod time_display;

pub use center_play_button::CenterPlayButton;
pub use control_bar::ControlBar;
pub use fullscreen_button::FullscreenButton;
pub use play_button::PlayButton;
pub use remote_button::RemoteButton;
pub use time_display::TimeDisplay;
