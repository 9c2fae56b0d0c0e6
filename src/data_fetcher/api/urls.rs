//! URL building utilities for site pages

use crate::data_fetcher::player_id::PlayerId;
use reqwest::Url;

/// Builds the game log URL of one player and season.
///
/// # Example
/// ```
/// use prop_scout::data_fetcher::api::build_game_log_url;
/// use prop_scout::data_fetcher::player_id::PlayerId;
///
/// let id = PlayerId::from_name("Trae Young").unwrap();
/// let url = build_game_log_url("https://stats.example.com", &id, 2025);
/// assert_eq!(url, "https://stats.example.com/players/y/youngtr01/gamelog/2025");
/// ```
pub fn build_game_log_url(base_url: &str, player_id: &PlayerId, season: i32) -> String {
    format!("{base_url}/players/{}/gamelog/{season}", player_id.path())
}

/// Builds the search URL for a free-text query, percent-encoding the query.
///
/// # Example
/// ```
/// use prop_scout::data_fetcher::api::build_search_url;
///
/// let url = build_search_url("https://stats.example.com", "De'Aaron Fox");
/// assert_eq!(url, "https://stats.example.com/search/search.fcgi?search=De%27Aaron+Fox");
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    let endpoint = format!("{base_url}/search/search.fcgi");
    match Url::parse_with_params(&endpoint, &[("search", query)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{endpoint}?search={query}"),
    }
}

/// Returns the player identifier when `url` points at a single player page
/// (`/players/<letter>/<id>.html`).
pub fn player_page_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let mut segments = parsed.path_segments()?;
    if segments.next()? != "players" {
        return None;
    }
    let _letter = segments.next()?;
    let page = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    page.strip_suffix(".html")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
