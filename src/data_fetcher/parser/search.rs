//! Player search page parsing.
//!
//! A search either redirects straight to a player page (single hit) or lands
//! on a listing of candidates. Both shapes map onto [`PlayerIdentity`].

use crate::constants::search::{MAX_RESULTS, UNKNOWN};
use crate::data_fetcher::api::urls::player_page_id;
use crate::data_fetcher::models::PlayerIdentity;
use crate::data_fetcher::player_id::PlayerId;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static META_NAME: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#meta h1").expect("meta name selector is valid"));
static META_LINES: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#meta p").expect("meta line selector is valid"));
static LISTING_ITEMS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div#players div.search-item").expect("listing item selector is valid")
});
static LISTING_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".search-item-name a").expect("listing link selector is valid"));

static POSITION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Position:\s*([^▪]+)").expect("position pattern is valid"));
static TEAM_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Team\s*:\s*([^▪]+)").expect("team pattern is valid"));

/// Parses whatever page the search ended up on. `final_url` is the URL after
/// redirects and decides between player page and listing.
pub fn parse_search_page(html: &str, final_url: &str) -> Vec<PlayerIdentity> {
    match player_page_id(final_url) {
        Some(id) => parse_player_page(html, &id).into_iter().collect(),
        None => parse_search_listing(html),
    }
}

/// Extracts the single player shown on a player page.
pub fn parse_player_page(html: &str, id: &str) -> Option<PlayerIdentity> {
    let document = Html::parse_document(html);

    let name = document
        .select(&META_NAME)
        .next()
        .map(|heading| collapse_text(&heading))
        .filter(|name| !name.is_empty())?;

    let lines: Vec<String> = document
        .select(&META_LINES)
        .map(|line| collapse_text(&line))
        .collect();

    let position = lines
        .iter()
        .find_map(|line| capture(&POSITION_LINE, line))
        .map(|text| abbreviate_position(&text))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let team = lines
        .iter()
        .find_map(|line| capture(&TEAM_LINE, line))
        .unwrap_or_else(|| UNKNOWN.to_string());

    debug!("Search resolved to player page of {name} ({id})");
    Some(PlayerIdentity::new(id, name, team, position))
}

/// Extracts up to [`MAX_RESULTS`] players from a search listing page.
pub fn parse_search_listing(html: &str) -> Vec<PlayerIdentity> {
    let document = Html::parse_document(html);

    let players: Vec<PlayerIdentity> = document
        .select(&LISTING_ITEMS)
        .filter_map(|item| parse_listing_item(&item))
        .take(MAX_RESULTS)
        .collect();

    debug!("Search listing yielded {} players", players.len());
    players
}

fn parse_listing_item(item: &ElementRef) -> Option<PlayerIdentity> {
    let link = item.select(&LISTING_LINK).next()?;
    let href = link.value().attr("href")?;
    if !href.starts_with("/players/") {
        return None;
    }
    let id = PlayerId::from_raw(href).ok()?;
    let name = collapse_text(&link);

    let text = collapse_text(item);
    let position = capture(&POSITION_LINE, &text)
        .map(|text| abbreviate_position(&text))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let team = capture(&TEAM_LINE, &text).unwrap_or_else(|| UNKNOWN.to_string());

    Some(PlayerIdentity::new(id.as_str(), name, team, position))
}

/// Maps a full position name to its standard abbreviation; anything else is
/// returned verbatim.
pub fn abbreviate_position(position: &str) -> String {
    let position = position.trim();
    match position {
        "Point Guard" => "PG",
        "Shooting Guard" => "SG",
        "Small Forward" => "SF",
        "Power Forward" => "PF",
        "Center" => "C",
        other => other,
    }
    .to_string()
}

fn collapse_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
