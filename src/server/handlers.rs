//! Request handlers of the HTTP API

use super::AppState;
use super::dto::{AnalyzeRequest, AnalyzeResponse, ErrorBody, GameLogEntry, SearchParams};
use crate::analysis::analyze_games;
use crate::constants::analysis::{DEFAULT_GAMES_COUNT, DEFAULT_SEASON_COUNT};
use crate::data_fetcher::aggregate::{GameLogOutcome, GameQuery};
use crate::data_fetcher::api::{current_season, recent_seasons};
use crate::data_fetcher::models::Venue;
use crate::data_fetcher::player_id::{PlayerLookup, strip_parenthetical};
use crate::error::AppError;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus, json, with_status};

/// Failed request: status code plus JSON error body.
#[derive(Debug)]
struct ApiFailure {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiFailure {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::new(message),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::new(message),
        }
    }

    fn into_reply(self) -> WithStatus<Json> {
        with_status(json(&self.body), self.status)
    }
}

impl From<AppError> for ApiFailure {
    fn from(error: AppError) -> Self {
        if error.is_invalid_input() {
            ApiFailure::bad_request(error.to_string())
        } else if error.is_not_found() {
            ApiFailure::not_found(error.to_string())
        } else {
            error!("Analysis failed: {error}");
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ErrorBody::new(error.to_string()),
            }
        }
    }
}

/// `GET /api/players/search?q=`
pub async fn search_players(
    params: SearchParams,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, Infallible> {
    let players = state.client.search_players(&params.q, &state.roster).await;
    info!("Search '{}' returned {} players", params.q.trim(), players.len());
    Ok(json(&players))
}

/// `POST /api/player/analyze`
pub async fn analyze_player(
    request: AnalyzeRequest,
    state: Arc<AppState>,
) -> Result<WithStatus<Json>, Infallible> {
    Ok(match run_analysis(&request, &state).await {
        Ok(response) => with_status(json(&response), StatusCode::OK),
        Err(failure) => {
            warn!(
                "Analyze request failed with {}: {}",
                failure.status, failure.body.error
            );
            failure.into_reply()
        }
    })
}

async fn run_analysis(
    request: &AnalyzeRequest,
    state: &AppState,
) -> Result<AnalyzeResponse, ApiFailure> {
    let player_name = request
        .player_name
        .as_deref()
        .map(strip_parenthetical)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiFailure::bad_request("Player name is required"))?;

    let venue = match request.location_filter() {
        Some(code) => Some(Venue::from_code(code).ok_or_else(|| {
            ApiFailure::bad_request(format!("Invalid location '{code}': expected H, A, N or ANY"))
        })?),
        None => None,
    };

    let count = request.games_count.unwrap_or(DEFAULT_GAMES_COUNT);
    if count == 0 {
        return Err(ApiFailure::bad_request("gamesCount must be at least 1"));
    }

    let seasons = if request.current_season_only() {
        vec![current_season()]
    } else {
        recent_seasons(DEFAULT_SEASON_COUNT)
    };

    let query = GameQuery::new(seasons)
        .with_opponent(request.opponent_filter())
        .with_venue(venue)
        .with_count(count);
    let lookup = PlayerLookup::from_parts(&player_name, request.player_id.as_deref());

    info!("Analyzing {player_name} with {query:?}");

    let games = match state.client.fetch_games(&lookup, &query).await? {
        GameLogOutcome::Games(games) => games,
        GameLogOutcome::NoData => {
            return Err(ApiFailure::not_found(format!(
                "No game data found for {player_name} in the requested seasons."
            )));
        }
        GameLogOutcome::NoOpponentGames { opponent } => {
            return Err(ApiFailure::not_found(format!(
                "No games found for {player_name} against {opponent}."
            )));
        }
        GameLogOutcome::NoMatchingGames => {
            return Err(ApiFailure::not_found(format!(
                "No games found for {player_name} with the specified filters."
            )));
        }
    };

    let stats = analyze_games(&games, &request.bet_lines.unwrap_or_default());

    Ok(AnalyzeResponse {
        player_name,
        game_logs: games.iter().map(GameLogEntry::from).collect(),
        stats,
    })
}

/// `POST /api/player/odds`, kept only to tell old clients it is gone.
pub fn deprecated_odds() -> WithStatus<Json> {
    with_status(
        json(
            &ErrorBody::new("This endpoint has been deprecated")
                .with_message("Prop bet lines are now set manually by the user"),
        ),
        StatusCode::GONE,
    )
}

/// `GET /api/test`
pub fn api_status() -> Json {
    json(&serde_json::json!({ "status": "API is working" }))
}
