pub mod clock;
pub mod player;
pub mod remote;

pub use clock::{SimClock, Tick};
pub use player::SimPlayer;
pub use remote::SimRemotePlayback;
