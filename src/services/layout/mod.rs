//! Event layout engine for the hour-grid views.
//!
//! A pass over one day buckets the events, orders the timed ones and packs
//! them into columns. Nothing is kept between calls: the same inputs always
//! give the same layout, and days can be computed in any order or on
//! separate threads.

pub mod bucketing;
pub mod ordering;
pub mod packing;
pub mod time_scale;

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::models::layout::{DayLayout, PositionedEvent};
use crate::models::settings::LayoutConfig;

pub use bucketing::{
    all_day_events_for_day, all_day_events_for_days, all_day_placements, is_banner_event,
    spans_day, timed_events_for_day,
};
pub use ordering::{compare_chronologically, sort_chronologically};
pub use packing::pack_columns;
pub use time_scale::{current_time_indicator, CurrentTimeIndicator};

/// Positioned timed events for `day`.
pub fn position_timed_events<'a>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    config: &LayoutConfig,
) -> Vec<PositionedEvent<'a>> {
    let mut timed = timed_events_for_day(events, day, &config.timezone);
    if timed.is_empty() {
        return Vec::new();
    }

    sort_chronologically(&mut timed);
    pack_columns(&timed, config)
}

/// Full layout of one day: banner lane plus hour grid.
pub fn layout_day<'a>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    config: &LayoutConfig,
) -> DayLayout<'a> {
    DayLayout {
        date: day,
        all_day: all_day_placements(events, day, &config.timezone),
        timed: position_timed_events(events, day, config),
    }
}

/// Lay out each day independently.
pub fn layout_days<'a>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
    config: &LayoutConfig,
) -> Vec<DayLayout<'a>> {
    let layouts: Vec<DayLayout<'a>> = days
        .iter()
        .map(|day| layout_day(events, *day, config))
        .collect();

    log::debug!(
        "laid out {} days from {} events",
        layouts.len(),
        events.len()
    );

    layouts
}
