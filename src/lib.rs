//! Basketball player prop bet analyzer
//!
//! This library scrapes per-game box score lines from a basketball statistics
//! site, filters them by opponent and venue, and summarizes points, assists
//! and rebounds against user supplied prop bet lines. The same pipeline backs
//! the command line tool and a small JSON HTTP API.
//!
//! # Examples
//!
//! ```rust,no_run
//! use prop_scout::analysis::{BetLines, analyze_games};
//! use prop_scout::data_fetcher::{GameQuery, PlayerLookup, SiteClient};
//! use prop_scout::data_fetcher::api::recent_seasons;
//! use prop_scout::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = SiteClient::new(&config)?;
//!
//!     // Last ten games against Boston over the two most recent seasons
//!     let query = GameQuery::new(recent_seasons(2)).with_opponent(Some("BOS".to_string()));
//!     let lookup = PlayerLookup::from_parts("Trae Young", None);
//!     let outcome = client.fetch_games(&lookup, &query).await?;
//!
//!     let lines = BetLines { points: 25.5, rebounds: 3.5, assists: 10.5 };
//!     let stats = analyze_games(outcome.games(), &lines);
//!     println!("{:.1} points per game", stats.points.average);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod server;

// Re-export commonly used types for convenience
pub use analysis::{BetLines, PlayerStats, StatSummary, Trend, analyze_games};
pub use config::Config;
pub use data_fetcher::{GameLogOutcome, GameQuery, GameRecord, PlayerIdentity, SiteClient};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
