//! Game log table parsing.
//!
//! Parsing is synchronous and works on borrowed page text; `scraper::Html`
//! is not `Send`, so documents never live across an `.await`.

use crate::constants::columns;
use crate::constants::game_log::{DATE_FORMAT, HEADER_ROW_CLASS, TABLE_CONTAINER_SELECTOR};
use crate::data_fetcher::api::season_utils::season_label;
use crate::data_fetcher::models::{DidNotPlayReason, GameLine, GameRecord};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::{debug, warn};

static TABLE_CONTAINER: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(TABLE_CONTAINER_SELECTOR).expect("table container selector is valid")
});
static BODY_ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody > tr").expect("row selector is valid"));
static STAT_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td[data-stat]").expect("cell selector is valid"));

/// Parses the game log table of one season page.
///
/// Returns `None` when the page has no game log table at all, which happens
/// both for layout changes and for players without games that season.
/// Individual rows never fail: malformed stats degrade to absent values and
/// rows without a usable date are skipped.
pub fn parse_game_log(html: &str, season: i32) -> Option<Vec<GameRecord>> {
    let document = Html::parse_document(html);
    let container = document.select(&TABLE_CONTAINER).next()?;

    let label = season_label(season);
    let mut records = Vec::new();

    for row in container.select(&BODY_ROWS) {
        if is_header_row(&row) {
            continue;
        }
        if let Some(record) = parse_row(&row, &label) {
            records.push(record);
        }
    }

    if records.is_empty() {
        warn!("Game log table for season {label} contained no game rows");
    } else {
        debug!("Parsed {} game rows for season {label}", records.len());
    }

    Some(records)
}

fn is_header_row(row: &ElementRef) -> bool {
    row.value().classes().any(|class| class == HEADER_ROW_CLASS)
}

fn parse_row(row: &ElementRef, season: &str) -> Option<GameRecord> {
    let cells = collect_cells(row);

    let date_text = first_cell(&cells, columns::DATE)?;
    let date = match NaiveDate::parse_from_str(date_text, DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            debug!("Skipping row with unreadable date '{date_text}'");
            return None;
        }
    };

    let opponent = first_cell(&cells, columns::OPPONENT)
        .filter(|text| !text.is_empty())
        .map(str::to_string);
    let location = first_cell(&cells, columns::LOCATION).map(str::to_string);
    let reason_text = cells.get(columns::REASON).map(String::as_str);

    let line = match reason_text.and_then(DidNotPlayReason::from_marker) {
        Some(reason) => GameLine::DidNotPlay { reason },
        None => GameLine::from_stats(
            parse_stat(&cells, columns::POINTS),
            parse_stat(&cells, columns::ASSISTS),
            parse_stat(&cells, columns::REBOUNDS),
            reason_text,
        ),
    };

    let minutes_played = cells
        .get(columns::MINUTES)
        .filter(|text| !text.is_empty())
        .cloned();

    Some(GameRecord {
        date,
        season: season.to_string(),
        opponent,
        location,
        line,
        minutes_played,
        raw_cells: cells,
    })
}

/// Every tagged cell of the row, keyed by its column tag, text trimmed.
fn collect_cells(row: &ElementRef) -> BTreeMap<String, String> {
    row.select(&STAT_CELLS)
        .filter_map(|cell| {
            let tag = cell.value().attr("data-stat")?;
            let text = cell.text().collect::<String>().trim().to_string();
            Some((tag.to_string(), text))
        })
        .collect()
}

fn first_cell<'a>(cells: &'a BTreeMap<String, String>, tags: &[&str]) -> Option<&'a str> {
    tags.iter()
        .find_map(|tag| cells.get(*tag))
        .map(String::as_str)
}

fn parse_stat(cells: &BTreeMap<String, String>, tag: &str) -> Option<u32> {
    cells.get(tag).and_then(|text| text.parse().ok())
}
