//! Hour-grid view model shared by the day, four-day and week views.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::event::CalendarEvent;
use crate::models::layout::DayLayout;
use crate::models::settings::LayoutConfig;
use crate::services::layout::time_scale::{grid_height, hour_slots};
use crate::services::layout::{
    all_day_events_for_days, current_time_indicator, layout_days, CurrentTimeIndicator,
};

/// Hour the grid scrolls to when first shown.
const INITIAL_SCROLL_HOUR: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeGridView<'a> {
    pub hours: Vec<u32>,
    pub row_height: f64,
    pub grid_height: f64,
    pub initial_scroll_top: f64,
    /// False when no banner event touches any displayed day, so the all-day
    /// row can be left out entirely.
    pub has_all_day_row: bool,
    pub days: Vec<DayLayout<'a>>,
    pub current_time: CurrentTimeIndicator,
}

pub fn build_time_grid<'a>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
    config: &LayoutConfig,
    now: DateTime<Utc>,
) -> TimeGridView<'a> {
    let grid_height = grid_height(config);
    let scroll_rows = INITIAL_SCROLL_HOUR.saturating_sub(config.day_start_hour);

    TimeGridView {
        hours: hour_slots(config),
        row_height: config.row_height,
        grid_height,
        initial_scroll_top: (scroll_rows as f64 * config.row_height).min(grid_height),
        has_all_day_row: !all_day_events_for_days(events, days, &config.timezone).is_empty(),
        days: layout_days(events, days, config),
        current_time: current_time_indicator(now, days, config),
    }
}
