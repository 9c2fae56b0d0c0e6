//! Multi-season aggregation and filtering of parsed game records.

use crate::constants::analysis::DEFAULT_GAMES_COUNT;
use crate::data_fetcher::models::{GameRecord, Venue};
use tracing::{debug, info};

/// What to fetch and how to narrow it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameQuery {
    /// Season years to fetch, any order
    pub seasons: Vec<i32>,
    /// Exact three letter opponent code
    pub opponent: Option<String>,
    pub venue: Option<Venue>,
    /// Maximum number of games returned
    pub count: usize,
}

impl GameQuery {
    pub fn new(seasons: Vec<i32>) -> Self {
        Self {
            seasons,
            opponent: None,
            venue: None,
            count: DEFAULT_GAMES_COUNT,
        }
    }

    pub fn with_opponent(mut self, opponent: Option<String>) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_venue(mut self, venue: Option<Venue>) -> Self {
        self.venue = venue;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Result of an aggregation. Empty outcomes say why they are empty.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLogOutcome {
    /// Between one and `count` complete games, newest first
    Games(Vec<GameRecord>),
    /// No requested season produced any data
    NoData,
    /// Data exists but the player never faced the requested opponent
    NoOpponentGames { opponent: String },
    /// Games exist but none is complete and at the requested location, or
    /// the requested count is zero
    NoMatchingGames,
}

impl GameLogOutcome {
    /// The selected games, empty for the no-data variants.
    pub fn games(&self) -> &[GameRecord] {
        match self {
            GameLogOutcome::Games(games) => games,
            _ => &[],
        }
    }

    pub fn into_games(self) -> Vec<GameRecord> {
        match self {
            GameLogOutcome::Games(games) => games,
            _ => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.games().is_empty()
    }
}

/// Combines the per-season records and applies the query.
///
/// Order of operations:
/// 1. concatenate seasons, `NoData` when nothing was returned
/// 2. sort by date, newest first
/// 3. opponent filter, `NoOpponentGames` when it leaves nothing
/// 4. drop records without complete stats
/// 5. location filter
/// 6. take the first `count`, `NoMatchingGames` when nothing is left
pub fn select_games(seasons: Vec<Vec<GameRecord>>, query: &GameQuery) -> GameLogOutcome {
    let mut games: Vec<GameRecord> = seasons.into_iter().flatten().collect();
    if games.is_empty() {
        info!("No game data in any of the seasons {:?}", query.seasons);
        return GameLogOutcome::NoData;
    }

    games.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(opponent) = &query.opponent {
        games.retain(|game| game.opponent.as_deref() == Some(opponent.as_str()));
        if games.is_empty() {
            info!("No games against {opponent} in seasons {:?}", query.seasons);
            return GameLogOutcome::NoOpponentGames {
                opponent: opponent.clone(),
            };
        }
    }

    let before = games.len();
    games.retain(GameRecord::is_complete);
    debug!(
        "Dropped {} games without complete stats",
        before - games.len()
    );

    if let Some(venue) = query.venue {
        games.retain(|game| game.venue() == Some(venue));
    }

    games.truncate(query.count);

    if games.is_empty() {
        info!("No complete games match the requested filters");
        return GameLogOutcome::NoMatchingGames;
    }

    if games.len() < query.count {
        info!(
            "Only found {} games with complete stats out of requested {}",
            games.len(),
            query.count
        );
    }

    GameLogOutcome::Games(games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{DidNotPlayReason, GameLine};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn game(date: &str, opponent: &str, location: &str, points: u32) -> GameRecord {
        GameRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            season: "2024-2025".to_string(),
            opponent: Some(opponent.to_string()),
            location: Some(location.to_string()),
            line: GameLine::Played {
                points,
                assists: 5,
                rebounds: 5,
            },
            minutes_played: Some("30:00".to_string()),
            raw_cells: BTreeMap::new(),
        }
    }

    fn missed(date: &str, opponent: &str) -> GameRecord {
        GameRecord {
            line: GameLine::DidNotPlay {
                reason: DidNotPlayReason::DidNotPlay,
            },
            ..game(date, opponent, "", 0)
        }
    }

    fn dates(outcome: &GameLogOutcome) -> Vec<String> {
        outcome
            .games()
            .iter()
            .map(|g| g.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    #[test]
    fn test_sorts_newest_first_across_seasons() {
        let seasons = vec![
            vec![game("2025-03-01", "BOS", "", 10)],
            vec![
                game("2025-03-08", "NYK", "@", 20),
                game("2025-03-06", "MIA", "", 30),
            ],
        ];

        let outcome = select_games(seasons, &GameQuery::new(vec![2025, 2024]));
        assert_eq!(dates(&outcome), vec!["2025-03-08", "2025-03-06", "2025-03-01"]);
    }

    #[test]
    fn test_opponent_filter_keeps_matching_in_date_order() {
        let opponents = ["BOS", "NYK", "BOS", "MIA", "LAL", "BOS", "DEN", "PHX", "ATL", "CHI"];
        let games: Vec<GameRecord> = opponents
            .iter()
            .enumerate()
            .map(|(i, opp)| game(&format!("2025-01-{:02}", i + 1), opp, "", i as u32))
            .collect();

        let query = GameQuery::new(vec![2025])
            .with_opponent(Some("BOS".to_string()))
            .with_count(10);
        let outcome = select_games(vec![games], &query);

        assert_eq!(dates(&outcome), vec!["2025-01-06", "2025-01-03", "2025-01-01"]);
        assert!(outcome
            .games()
            .iter()
            .all(|g| g.opponent.as_deref() == Some("BOS")));
    }

    #[test]
    fn test_fewer_than_requested_is_not_an_error() {
        let games: Vec<GameRecord> = (1..=4)
            .map(|day| game(&format!("2025-02-{day:02}"), "BOS", "", day))
            .collect();

        let outcome = select_games(vec![games], &GameQuery::new(vec![2025]).with_count(10));
        assert_eq!(outcome.games().len(), 4);
    }

    #[test]
    fn test_count_truncates() {
        let games: Vec<GameRecord> = (1..=12)
            .map(|day| game(&format!("2025-02-{day:02}"), "BOS", "", day))
            .collect();

        let outcome = select_games(vec![games], &GameQuery::new(vec![2025]).with_count(3));
        assert_eq!(dates(&outcome), vec!["2025-02-12", "2025-02-11", "2025-02-10"]);
    }

    #[test]
    fn test_did_not_play_rows_dropped_and_not_counted() {
        let games = vec![
            missed("2025-03-10", "BOS"),
            game("2025-03-08", "BOS", "", 31),
            missed("2025-03-07", "NYK"),
            game("2025-03-05", "NYK", "@", 22),
        ];

        let outcome = select_games(vec![games], &GameQuery::new(vec![2025]).with_count(2));
        assert_eq!(dates(&outcome), vec!["2025-03-08", "2025-03-05"]);
        assert!(outcome.games().iter().all(GameRecord::is_complete));
    }

    #[test]
    fn test_no_data_and_no_opponent_games() {
        let outcome = select_games(vec![Vec::new(), Vec::new()], &GameQuery::new(vec![2025]));
        assert_eq!(outcome, GameLogOutcome::NoData);
        assert!(outcome.is_empty());

        let query = GameQuery::new(vec![2025]).with_opponent(Some("BOS".to_string()));
        let outcome = select_games(vec![vec![game("2025-03-01", "NYK", "", 10)]], &query);
        assert_eq!(
            outcome,
            GameLogOutcome::NoOpponentGames {
                opponent: "BOS".to_string()
            }
        );
    }

    #[test]
    fn test_nothing_left_after_filters_is_no_matching_games() {
        let query = GameQuery::new(vec![2025]).with_opponent(Some("BOS".to_string()));
        let outcome = select_games(vec![vec![missed("2025-03-01", "BOS")]], &query);
        assert_eq!(outcome, GameLogOutcome::NoMatchingGames);
        assert!(outcome.is_empty());

        let query = GameQuery::new(vec![2025]).with_venue(Some(Venue::Neutral));
        let outcome = select_games(vec![vec![game("2025-03-01", "BOS", "@", 12)]], &query);
        assert_eq!(outcome, GameLogOutcome::NoMatchingGames);
    }

    #[test]
    fn test_zero_count_is_no_matching_games() {
        let query = GameQuery::new(vec![2025]).with_count(0);
        let outcome = select_games(vec![vec![game("2025-03-01", "BOS", "", 12)]], &query);
        assert_eq!(outcome, GameLogOutcome::NoMatchingGames);
    }

    #[test]
    fn test_venue_filter_applied_after_completeness() {
        let games = vec![
            game("2025-03-09", "BOS", "@", 10),
            game("2025-03-08", "NYK", "", 20),
            missed("2025-03-07", "MIA"),
            game("2025-03-06", "MIA", "N", 30),
            game("2025-03-05", "LAL", "@", 40),
        ];

        let query = GameQuery::new(vec![2025]).with_venue(Some(Venue::Away));
        let outcome = select_games(vec![games.clone()], &query);
        assert_eq!(dates(&outcome), vec!["2025-03-09", "2025-03-05"]);

        let query = GameQuery::new(vec![2025]).with_venue(Some(Venue::Home));
        let outcome = select_games(vec![games], &query);
        assert_eq!(dates(&outcome), vec!["2025-03-08"]);
    }

    #[test]
    fn test_round_trip_from_parsed_page() {
        let html = r#"<div id="div_pgl_basic"><table><tbody>
            <tr><td data-stat="date_game">2025-03-08</td><td data-stat="opp_id">BOS</td>
                <td data-stat="pts">31</td><td data-stat="ast">8</td><td data-stat="trb">12</td></tr>
            <tr><td data-stat="date_game">2025-03-10</td><td data-stat="opp_id">NYK</td>
                <td data-stat="reason">Did Not Play</td></tr>
        </tbody></table></div>"#;

        let records = crate::data_fetcher::parser::parse_game_log(html, 2025).unwrap();
        assert_eq!(records.len(), 2);

        let outcome = select_games(vec![records], &GameQuery::new(vec![2025]));
        assert_eq!(outcome.games().len(), 1);
        assert_eq!(outcome.games()[0].points(), Some(31));
    }
}
