// Property-based tests for the time-grid layout engine
// Random days of events must always pack into non-overlapping columns

use calendar_layout::models::event::CalendarEvent;
use calendar_layout::models::settings::{ColumnWidthMode, LayoutConfig};
use calendar_layout::services::layout::{
    all_day_events_for_day, layout_day, position_timed_events, timed_events_for_day,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// (start minute of day, duration in minutes, all_day)
fn event_strategy() -> impl Strategy<Value = (u32, u32, bool)> {
    (0..1380u32, 1..240u32, prop::bool::weighted(0.1))
}

fn build_events(specs: &[(u32, u32, bool)]) -> Vec<CalendarEvent> {
    let midnight = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
    specs
        .iter()
        .enumerate()
        .map(|(index, (start_minute, duration, all_day))| {
            let start = midnight + Duration::minutes(*start_minute as i64);
            // Keep timed events on the same day
            let end = (start + Duration::minutes(*duration as i64))
                .min(midnight + Duration::minutes(23 * 60 + 59));
            CalendarEvent {
                id: format!("event-{}", index),
                title: format!("Event {}", index),
                description: None,
                location: None,
                color: None,
                start,
                end,
                all_day: *all_day,
            }
        })
        .collect()
}

proptest! {
    /// Property: events sharing a column never overlap in time
    #[test]
    fn prop_no_overlap_within_column(specs in prop::collection::vec(event_strategy(), 0..40)) {
        let events = build_events(&specs);
        let positioned = position_timed_events(&events, day(), &LayoutConfig::default());

        for (i, a) in positioned.iter().enumerate() {
            for b in positioned.iter().skip(i + 1) {
                if a.column == b.column {
                    let overlap = a.event.start < b.event.end && b.event.start < a.event.end;
                    prop_assert!(!overlap, "{} and {} overlap in column {}", a.event.id, b.event.id, a.column);
                }
            }
        }
    }

    /// Property: an event goes into the first column that is free when it starts
    #[test]
    fn prop_first_free_column_chosen(specs in prop::collection::vec(event_strategy(), 0..40)) {
        let events = build_events(&specs);
        let positioned = position_timed_events(&events, day(), &LayoutConfig::default());

        for (i, placed) in positioned.iter().enumerate() {
            for lower in 0..placed.column {
                // Latest event placed in the lower column before this one
                let blocker = positioned[..i]
                    .iter()
                    .filter(|earlier| earlier.column == lower)
                    .last();
                prop_assert!(
                    blocker.map_or(false, |b| b.event.end > placed.event.start),
                    "column {} was free for {}", lower, placed.event.id
                );
            }
        }
    }

    /// Property: vertical geometry follows the hour scale
    #[test]
    fn prop_top_and_height_follow_scale(
        specs in prop::collection::vec(event_strategy(), 1..20),
        row_height in 20.0..120.0f64,
    ) {
        let config = LayoutConfig { row_height, ..LayoutConfig::default() };
        let events = build_events(&specs);

        for placed in position_timed_events(&events, day(), &config) {
            let start_minutes = (placed.event.start - Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()).num_minutes();
            let duration = (placed.event.end - placed.event.start).num_minutes();

            prop_assert!((placed.top - start_minutes as f64 / 60.0 * row_height).abs() < 1e-9);
            let expected = (duration as f64 / 60.0 * row_height).max(config.min_event_height);
            prop_assert!((placed.height - expected).abs() < 1e-9);
            prop_assert!(placed.height >= config.min_event_height);
        }
    }

    /// Property: widths and offsets stay inside the day column
    #[test]
    fn prop_horizontal_bounds(
        specs in prop::collection::vec(event_strategy(), 1..40),
        settled in any::<bool>(),
    ) {
        let config = LayoutConfig {
            column_width_mode: if settled { ColumnWidthMode::Settled } else { ColumnWidthMode::Progressive },
            ..LayoutConfig::default()
        };
        let events = build_events(&specs);

        for placed in position_timed_events(&events, day(), &config) {
            prop_assert!(placed.width > 0.0 && placed.width <= 100.0);
            prop_assert!(placed.left >= 0.0);
            prop_assert!(placed.left + placed.width <= 100.0 + 1e-9);
            prop_assert!((placed.left - placed.column as f64 * placed.width).abs() < 1e-9);
            prop_assert_eq!(placed.z_index, placed.column);
        }
    }

    /// Property: all-day events only ever land in the banner lane
    #[test]
    fn prop_lanes_are_disjoint(specs in prop::collection::vec(event_strategy(), 0..40)) {
        let events = build_events(&specs);
        let banner = all_day_events_for_day(&events, day(), &Utc);
        let timed = timed_events_for_day(&events, day(), &Utc);

        prop_assert_eq!(banner.len() + timed.len(), events.len());
        prop_assert!(banner.iter().all(|e| e.all_day));
        prop_assert!(timed.iter().all(|e| !e.all_day));
    }

    /// Property: laying out the same input twice gives the same result
    #[test]
    fn prop_layout_is_idempotent(specs in prop::collection::vec(event_strategy(), 0..40)) {
        let events = build_events(&specs);
        let config = LayoutConfig::default();

        prop_assert_eq!(layout_day(&events, day(), &config), layout_day(&events, day(), &config));
    }
}
