//! Request and response bodies of the HTTP API

use crate::analysis::{BetLines, PlayerStats, convert_minutes};
use crate::data_fetcher::models::GameRecord;
use serde::{Deserialize, Serialize};

/// Value of `opponent`/`location` meaning "no filter"
pub const ANY_FILTER: &str = "ANY";

/// Value of `seasons` meaning "only the current season"
pub const CURRENT_SEASON_ONLY: &str = "current";

/// Query string of the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Body of the analyze endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub player_name: Option<String>,
    pub player_id: Option<String>,
    pub opponent: Option<String>,
    pub location: Option<String>,
    pub games_count: Option<usize>,
    pub seasons: Option<String>,
    pub bet_lines: Option<BetLines>,
}

impl AnalyzeRequest {
    /// Opponent filter, upper-cased, `None` for empty or `ANY`.
    pub fn opponent_filter(&self) -> Option<String> {
        filter_value(self.opponent.as_deref()).map(|opponent| opponent.to_ascii_uppercase())
    }

    /// Raw location filter, `None` for empty or `ANY`.
    pub fn location_filter(&self) -> Option<&str> {
        filter_value(self.location.as_deref())
    }

    pub fn current_season_only(&self) -> bool {
        self.seasons.as_deref().unwrap_or(CURRENT_SEASON_ONLY) == CURRENT_SEASON_ONLY
    }
}

fn filter_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(ANY_FILTER))
}

/// One row of the returned game log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogEntry {
    pub date: String,
    pub opponent: String,
    /// `H`, `A` or `N`
    pub location: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub minutes: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl From<&GameRecord> for GameLogEntry {
    fn from(game: &GameRecord) -> Self {
        Self {
            date: game.date.format("%Y-%m-%d").to_string(),
            opponent: game.opponent.clone().unwrap_or_default(),
            location: game.venue().map_or("H", |venue| venue.code()).to_string(),
            points: game.points().map(f64::from).unwrap_or_default(),
            rebounds: game.rebounds().map(f64::from).unwrap_or_default(),
            assists: game.assists().map(f64::from).unwrap_or_default(),
            minutes: convert_minutes(game.minutes_played.as_deref()),
            result: game.result().map(str::to_string),
        }
    }
}

/// Body of a successful analysis
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub player_name: String,
    pub game_logs: Vec<GameLogEntry>,
    pub stats: PlayerStats,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
