//! HTML parsing of site pages

pub mod game_log;
pub mod search;

pub use game_log::parse_game_log;
pub use search::{abbreviate_position, parse_search_page};
