use crate::config::Config;
use crate::constants::search::MIN_QUERY_CHARS;
use crate::data_fetcher::aggregate::{GameLogOutcome, GameQuery, select_games};
use crate::data_fetcher::models::{GameRecord, PlayerIdentity};
use crate::data_fetcher::parser::{parse_game_log, parse_search_page};
use crate::data_fetcher::player_id::{PlayerId, PlayerLookup};
use crate::data_fetcher::roster::Roster;
use crate::error::AppError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::fetch_page;
use super::http_client::create_http_client_with_timeout;
use super::season_utils::season_label;
use super::urls::{build_game_log_url, build_search_url};

/// Client for the statistics site. Holds no mutable state, so one instance
/// can be shared between concurrent requests.
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
    base_url: String,
    request_delay: Duration,
}

impl SiteClient {
    /// Builds a client from the effective configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(
            client,
            config.normalized_base_url(),
            config.request_delay(),
        ))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>, request_delay: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_delay,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches and parses one season's game log.
    ///
    /// # Errors
    /// Any non-200 response or network failure, and `NoGameLogTable` when the
    /// page has no game log table.
    #[instrument(skip(self), fields(player = %player_id))]
    pub async fn fetch_season_game_log(
        &self,
        player_id: &PlayerId,
        season: i32,
    ) -> Result<Vec<GameRecord>, AppError> {
        let url = build_game_log_url(&self.base_url, player_id, season);
        let page = fetch_page(&self.client, &url, self.request_delay).await?;

        parse_game_log(&page.body, season).ok_or_else(|| AppError::no_game_log_table(url))
    }

    /// Fetches every season of the query one after the other and aggregates
    /// the results.
    ///
    /// Seasons that fail or have no games are logged and left out. The only
    /// errors returned are for a player name or identifier that cannot be
    /// resolved.
    #[instrument(skip(self))]
    pub async fn fetch_games(
        &self,
        lookup: &PlayerLookup,
        query: &GameQuery,
    ) -> Result<GameLogOutcome, AppError> {
        let player_id = lookup.resolve()?;

        // Each season year is fetched once, newest first
        let mut years = query.seasons.clone();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        info!("Fetching {} seasons for {player_id}", years.len());

        let mut seasons = Vec::with_capacity(years.len());
        for season in years {
            let label = season_label(season);
            match self.fetch_season_game_log(&player_id, season).await {
                Ok(records) if records.is_empty() => {
                    info!("No games for {player_id} in the {label} season");
                }
                Ok(records) => {
                    debug!("{} rows for {player_id} in the {label} season", records.len());
                    seasons.push(records);
                }
                Err(e) if e.is_not_found() => {
                    warn!("No game log for {player_id} in the {label} season: {e}");
                }
                Err(e) => {
                    warn!("Skipping the {label} season for {player_id}: {e}");
                }
            }
        }

        Ok(select_games(seasons, query))
    }

    /// Searches players by name.
    ///
    /// Queries shorter than two characters return nothing without a request.
    /// When the live search fails or finds nobody the roster is searched
    /// instead, so this never fails.
    #[instrument(skip(self, roster))]
    pub async fn search_players(&self, query: &str, roster: &Roster) -> Vec<PlayerIdentity> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        match self.search_live(query).await {
            Ok(players) if !players.is_empty() => players,
            Ok(_) => {
                info!("Live search for '{query}' found nobody, using the fallback roster");
                roster.search(query)
            }
            Err(e) => {
                warn!("Live search for '{query}' failed, using the fallback roster: {e}");
                roster.search(query)
            }
        }
    }

    async fn search_live(&self, query: &str) -> Result<Vec<PlayerIdentity>, AppError> {
        let url = build_search_url(&self.base_url, query);
        let page = fetch_page(&self.client, &url, self.request_delay).await?;
        Ok(parse_search_page(&page.body, &page.url))
    }
}
