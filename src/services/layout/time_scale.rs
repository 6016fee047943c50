//! Time-to-pixel conversion for the hour grid.
//!
//! All vertical positions share one convention: an hour is `row_height`
//! pixels tall and pixel zero is the top of `day_start_hour`. The current time
//! indicator uses the same formula as event tops so the two line up.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::models::event::CalendarEvent;
use crate::models::settings::LayoutConfig;

/// Minutes between `day_start_hour` and the wall-clock time of `time`.
/// Seconds are ignored. Negative for times before the visible window.
pub fn minutes_from_day_start<T: Timelike>(time: &T, day_start_hour: u32) -> i64 {
    time.hour() as i64 * 60 + time.minute() as i64 - day_start_hour as i64 * 60
}

/// Whole minutes from start to end, truncated toward zero. Negative when the
/// event ends before it starts.
pub fn duration_minutes(event: &CalendarEvent) -> i64 {
    (event.end - event.start).num_minutes()
}

pub fn top_offset(minutes_from_start: i64, row_height: f64) -> f64 {
    (minutes_from_start as f64 / 60.0) * row_height
}

/// Box height for a duration, floored at `min_height` so short or
/// malformed events stay visible.
pub fn event_height(duration_minutes: i64, row_height: f64, min_height: f64) -> f64 {
    ((duration_minutes as f64 / 60.0) * row_height).max(min_height)
}

pub fn grid_height(config: &LayoutConfig) -> f64 {
    config.day_end_hour.saturating_sub(config.day_start_hour) as f64 * config.row_height
}

/// Hour labels of the grid, one per row.
pub fn hour_slots(config: &LayoutConfig) -> Vec<u32> {
    (config.day_start_hour..config.day_end_hour).collect()
}

/// Position of the "now" line on a time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTimeIndicator {
    pub date: NaiveDate,
    /// Pixels from the top of the grid.
    pub position: f64,
    /// Percent of the visible hour window.
    pub percent: f64,
    /// True when `date` is displayed and the time falls inside the window.
    pub visible: bool,
}

pub fn current_time_indicator(
    now: DateTime<Utc>,
    days: &[NaiveDate],
    config: &LayoutConfig,
) -> CurrentTimeIndicator {
    let local_now = now.with_timezone(&config.timezone);
    let minutes = minutes_from_day_start(&local_now, config.day_start_hour);
    let window_minutes = config.day_end_hour.saturating_sub(config.day_start_hour) as i64 * 60;

    let percent = if window_minutes > 0 {
        minutes as f64 / window_minutes as f64 * 100.0
    } else {
        0.0
    };

    let date = local_now.date_naive();
    let visible = days.contains(&date) && (0..window_minutes).contains(&minutes);

    CurrentTimeIndicator {
        date,
        position: top_offset(minutes, config.row_height),
        percent,
        visible,
    }
}
