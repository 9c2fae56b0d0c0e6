//! Betting statistics over a series of stat values.

use crate::constants::analysis::{TREND_THRESHOLD, TREND_WINDOW};
use serde::Serialize;

/// Direction of recent form compared to the window before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Summary of one stat category over the selected games.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Share of games strictly above the bet line, in percent
    pub over_percentage: f64,
    pub last_five_avg: f64,
    pub trend: Trend,
}

impl StatSummary {
    fn empty() -> Self {
        Self {
            average: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
            over_percentage: 0.0,
            last_five_avg: 0.0,
            trend: Trend::Stable,
        }
    }
}

/// Summarizes `values`, which must be ordered newest first.
pub fn calculate_stats(values: &[f64], bet_line: f64) -> StatSummary {
    if values.is_empty() {
        return StatSummary::empty();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let over_count = values.iter().filter(|&&value| value > bet_line).count();
    let over_percentage = over_count as f64 / values.len() as f64 * 100.0;

    let last_window = &values[..values.len().min(TREND_WINDOW)];
    let previous_window = values
        .get(TREND_WINDOW..values.len().min(TREND_WINDOW * 2))
        .unwrap_or_default();

    let last_avg = mean(last_window);
    let previous_avg = if previous_window.is_empty() {
        last_avg
    } else {
        mean(previous_window)
    };

    StatSummary {
        average: round1(mean(values)),
        median: median(&sorted),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        over_percentage: round1(over_percentage),
        last_five_avg: round1(last_avg),
        trend: trend(last_avg, previous_avg),
    }
}

/// Upper median of already sorted values, 0 when empty.
pub fn median(sorted: &[f64]) -> f64 {
    sorted.get(sorted.len() / 2).copied().unwrap_or_default()
}

/// Median that averages the two middle values for even counts, 0 when empty.
/// Used by the text report; the API keeps the upper median.
pub fn interpolated_median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    match sorted.len() {
        0 => 0.0,
        len if len % 2 == 0 => (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0,
        len => sorted[len / 2],
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn trend(last: f64, previous: f64) -> Trend {
    if last > previous + TREND_THRESHOLD {
        Trend::Up
    } else if last < previous - TREND_THRESHOLD {
        Trend::Down
    } else {
        Trend::Stable
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts a minutes-played cell (`MM:SS`) to fractional minutes.
///
/// A bare number is taken as minutes. Missing or malformed input is 0.
pub fn convert_minutes(minutes: Option<&str>) -> f64 {
    let Some(text) = minutes.map(str::trim) else {
        return 0.0;
    };

    if let Some((mins, secs)) = text.split_once(':') {
        return match (mins.parse::<u32>(), secs.parse::<u32>()) {
            (Ok(mins), Ok(secs)) => f64::from(mins) + f64::from(secs) / 60.0,
            _ => 0.0,
        };
    }

    text.parse::<f64>().unwrap_or(0.0)
}
