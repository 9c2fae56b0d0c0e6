//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default root of the statistics site
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default pause before every outbound page request, in milliseconds
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

/// Default listen address for the HTTP API
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5001";

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Browser-like User-Agent; the site rejects obvious bot agents
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Log file name used when no custom path is configured
pub const LOG_FILE_NAME: &str = "prop_scout.log";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "prop_scout";

/// Environment variable overrides for [`crate::config::Config`]
pub mod env_vars {
    pub const BASE_URL: &str = "PROP_SCOUT_BASE_URL";
    pub const LOG_FILE: &str = "PROP_SCOUT_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "PROP_SCOUT_HTTP_TIMEOUT";
    pub const REQUEST_DELAY_MS: &str = "PROP_SCOUT_REQUEST_DELAY_MS";
    pub const BIND: &str = "PROP_SCOUT_BIND";
}

/// Game log page layout
pub mod game_log {
    /// Container of the regular season game log table
    pub const TABLE_CONTAINER_SELECTOR: &str = "div#div_pgl_basic";

    /// Class marking repeated header rows inside the table body
    pub const HEADER_ROW_CLASS: &str = "thead";

    /// Row texts that mark a scheduled game the player did not take part in
    pub const DID_NOT_PLAY: &str = "Did Not Play";
    pub const INACTIVE: &str = "Inactive";
    pub const DID_NOT_DRESS: &str = "Did Not Dress";

    /// Date format of the date column
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// `data-stat` column tags of the game log table
pub mod columns {
    pub const DATE: &[&str] = &["date_game", "date"];
    pub const OPPONENT: &[&str] = &["opp_id", "opp_name_abbr"];
    pub const LOCATION: &[&str] = &["game_location"];
    pub const POINTS: &str = "pts";
    pub const ASSISTS: &str = "ast";
    pub const REBOUNDS: &str = "trb";
    pub const MINUTES: &str = "mp";
    pub const REASON: &str = "reason";
    pub const RESULT: &str = "game_result";
}

/// Player search limits
pub mod search {
    /// Queries shorter than this (in characters, after trimming) return nothing
    pub const MIN_QUERY_CHARS: usize = 2;

    /// Maximum number of results returned from a listing page
    pub const MAX_RESULTS: usize = 25;

    /// Placeholder for team/position when the page does not show them
    pub const UNKNOWN: &str = "Unknown";
}

/// Analysis defaults
pub mod analysis {
    /// Games returned when the caller does not specify a count
    pub const DEFAULT_GAMES_COUNT: usize = 10;

    /// Seasons analyzed by the CLI when not limited to the current one
    pub const DEFAULT_SEASON_COUNT: u32 = 2;

    /// Size of the recent-form window used for the trend
    pub const TREND_WINDOW: usize = 5;

    /// Difference between windows (in stat units) that counts as a trend
    pub const TREND_THRESHOLD: f64 = 1.0;

    /// Month from which the next season is considered current (July)
    pub const SEASON_ROLLOVER_MONTH: u32 = 7;
}
