//! HTTP API consumed by the web frontend

pub mod dto;
pub mod handlers;

use crate::config::Config;
use crate::data_fetcher::SiteClient;
use crate::data_fetcher::roster::Roster;
use crate::error::AppError;
use dto::ErrorBody;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};
use warp::Filter;
use warp::http::StatusCode;

/// Largest accepted request body
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Immutable state shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: SiteClient,
    pub roster: Roster,
}

impl AppState {
    pub fn new(client: SiteClient, roster: Roster) -> Self {
        Self { client, roster }
    }
}

/// Creates all API routes with CORS and JSON error replies.
pub fn create_routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());

    // Player search endpoint
    let search = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<dto::SearchParams>())
        .and(state_filter.clone())
        .and_then(handlers::search_players);

    // Player analysis endpoint
    let analyze = warp::path("api")
        .and(warp::path("player"))
        .and(warp::path("analyze"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<dto::AnalyzeRequest>())
        .and(state_filter)
        .and_then(handlers::analyze_player);

    // Deprecated odds endpoint
    let odds = warp::path("api")
        .and(warp::path("player"))
        .and(warp::path("odds"))
        .and(warp::path::end())
        .and(warp::post())
        .map(handlers::deprecated_odds);

    // Liveness endpoint
    let status = warp::path("api")
        .and(warp::path("test"))
        .and(warp::path::end())
        .and(warp::get())
        .map(handlers::api_status);

    search
        .or(analyze)
        .or(odds)
        .or(status)
        .recover(handle_rejection)
        .with(
            warp::cors()
                .allow_any_origin()
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST", "OPTIONS"]),
        )
}

/// Turns rejections into JSON error replies.
async fn handle_rejection(rejection: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, format!("Invalid request body: {e}"))
    } else if let Some(e) = rejection.find::<warp::reject::InvalidQuery>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            "Content-Length header is required".to_string(),
        )
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string())
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Expected a JSON body".to_string(),
        )
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        debug!("Unhandled rejection: {rejection:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&ErrorBody::new(message)),
        status,
    ))
}

/// Runs the HTTP API until Ctrl-C.
///
/// `bind_override` takes precedence over the configured bind address.
pub async fn serve(config: &Config, bind_override: Option<&str>) -> Result<(), AppError> {
    let bind = bind_override.unwrap_or(&config.bind_address);
    let address: SocketAddr = bind
        .parse()
        .map_err(|e| AppError::server_error(format!("Invalid bind address '{bind}': {e}")))?;

    let state = Arc::new(AppState::new(
        SiteClient::new(config)?,
        Roster::builtin().clone(),
    ));
    let routes = create_routes(state);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {e}");
        }
        info!("Shutting down HTTP API");
    };

    let (bound, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(address, shutdown)
        .map_err(|e| AppError::server_error(format!("Failed to bind {address}: {e}")))?;

    info!("HTTP API listening on http://{bound}");
    server.await;
    Ok(())
}
