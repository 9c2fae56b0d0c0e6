pub mod game_log;
pub mod players;

pub use game_log::{DidNotPlayReason, GameLine, GameRecord, Venue};
pub use players::PlayerIdentity;
