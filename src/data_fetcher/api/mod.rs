pub mod fetch_utils;
pub mod http_client;
pub mod season_utils;
pub mod urls;
mod core;

// Re-export URL utilities
pub use urls::*;
// Re-export season arithmetic
pub use season_utils::{current_season, recent_seasons, season_label};
// Re-export core API client
pub use core::*;
