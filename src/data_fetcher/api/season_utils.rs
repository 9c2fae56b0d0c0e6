//! Season year arithmetic
//!
//! Seasons are named by the year they end in: 2025 is the 2024-2025 season.

use crate::constants::analysis::SEASON_ROLLOVER_MONTH;
use chrono::{Datelike, Local, NaiveDate};

/// Returns the season year that is current today.
pub fn current_season() -> i32 {
    current_season_with_date(Local::now().date_naive())
}

/// Season year current on `date`. From July on the upcoming season counts as
/// current, since the finished one is over by then.
pub fn current_season_with_date(date: NaiveDate) -> i32 {
    if date.month() >= SEASON_ROLLOVER_MONTH {
        date.year() + 1
    } else {
        date.year()
    }
}

/// The `count` most recent season years, newest first.
pub fn recent_seasons(count: u32) -> Vec<i32> {
    recent_seasons_from(current_season(), count)
}

pub fn recent_seasons_from(current: i32, count: u32) -> Vec<i32> {
    (0..count as i32).map(|offset| current - offset).collect()
}

/// Human readable label such as `2024-2025`.
pub fn season_label(season: i32) -> String {
    format!("{}-{}", season - 1, season)
}
