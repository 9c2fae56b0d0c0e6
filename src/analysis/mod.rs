//! Statistics over selected games, as used for prop bet lines.

pub mod stats;

pub use stats::{StatSummary, Trend, calculate_stats, convert_minutes, interpolated_median};

use crate::data_fetcher::models::GameRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three core stat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
}

impl StatCategory {
    pub const ALL: [StatCategory; 3] = [
        StatCategory::Points,
        StatCategory::Assists,
        StatCategory::Rebounds,
    ];

    pub fn value(self, game: &GameRecord) -> Option<u32> {
        match self {
            StatCategory::Points => game.points(),
            StatCategory::Rebounds => game.rebounds(),
            StatCategory::Assists => game.assists(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatCategory::Points => "Points",
            StatCategory::Rebounds => "Rebounds",
            StatCategory::Assists => "Assists",
        }
    }

    /// Values of this category for every complete game, in the given order.
    pub fn values(self, games: &[GameRecord]) -> Vec<f64> {
        games
            .iter()
            .filter_map(|game| self.value(game))
            .map(f64::from)
            .collect()
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bet lines per category. Missing lines count as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BetLines {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

impl BetLines {
    pub fn line(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::Points => self.points,
            StatCategory::Rebounds => self.rebounds,
            StatCategory::Assists => self.assists,
        }
    }
}

/// Summaries of all three categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub points: StatSummary,
    pub rebounds: StatSummary,
    pub assists: StatSummary,
}

/// Summarizes `games` (newest first) against the bet lines.
pub fn analyze_games(games: &[GameRecord], lines: &BetLines) -> PlayerStats {
    let summarize =
        |category: StatCategory| calculate_stats(&category.values(games), lines.line(category));

    PlayerStats {
        points: summarize(StatCategory::Points),
        rebounds: summarize(StatCategory::Rebounds),
        assists: summarize(StatCategory::Assists),
    }
}

/// Average and median of one category within one season.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverage {
    pub category: StatCategory,
    pub average: f64,
    pub median: f64,
}

/// Per-season breakdown of the selected games.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    /// Season label such as `2024-2025`
    pub season: String,
    pub games: usize,
    pub categories: Vec<CategoryAverage>,
}

/// Groups `games` by season, newest season first.
pub fn season_summaries(games: &[GameRecord]) -> Vec<SeasonSummary> {
    let mut seasons: Vec<&str> = games.iter().map(|game| game.season.as_str()).collect();
    seasons.sort_unstable_by(|a, b| b.cmp(a));
    seasons.dedup();

    seasons
        .into_iter()
        .map(|season| {
            let season_games: Vec<GameRecord> = games
                .iter()
                .filter(|game| game.season == season)
                .cloned()
                .collect();

            let categories = StatCategory::ALL
                .iter()
                .map(|&category| {
                    let values = category.values(&season_games);
                    CategoryAverage {
                        category,
                        average: calculate_stats(&values, 0.0).average,
                        median: interpolated_median(&values),
                    }
                })
                .collect();

            SeasonSummary {
                season: season.to_string(),
                games: season_games.len(),
                categories,
            }
        })
        .collect()
}
