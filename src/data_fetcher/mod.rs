pub mod aggregate;
pub mod api;
pub mod models;
pub mod parser;
pub mod player_id;
pub mod roster;

pub use aggregate::{GameLogOutcome, GameQuery, select_games};
pub use api::SiteClient;
pub use models::{GameRecord, PlayerIdentity, Venue};
pub use player_id::{PlayerId, PlayerLookup};
pub use roster::Roster;
