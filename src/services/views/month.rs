//! Month and year view models.

use chrono::{Datelike, NaiveDate, TimeZone};
use serde::Serialize;

use crate::models::event::CalendarEvent;
use crate::services::event::queries::{all_events_for_day, events_for_day};
use crate::utils::date::{chunk_weeks, is_same_month, is_weekend, month_grid_days, months_of_year};

/// Sizing used to decide how many event chips fit in a month cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Measured content height of a cell; `None` until the host has measured.
    pub content_height: Option<f64>,
    pub event_height: f64,
    pub event_gap: f64,
}

/// How many of `total` events to show in a cell of the given size.
///
/// When everything does not fit, one row is given up to the "+N more" link.
pub fn visible_event_count(total: usize, metrics: &CellMetrics) -> usize {
    let Some(content_height) = metrics.content_height else {
        return total;
    };

    let row = metrics.event_height + metrics.event_gap;
    if row <= 0.0 {
        return total;
    }

    let max_events = (content_height / row).floor().max(0.0) as usize;
    if total <= max_events {
        total
    } else {
        max_events.saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell<'a> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_weekend: bool,
    /// Continuations of earlier banner events first, then events starting
    /// on this day in start order.
    pub events: Vec<&'a CalendarEvent>,
    pub visible_count: usize,
    pub hidden_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView<'a> {
    pub month: NaiveDate,
    pub weekday_labels: Vec<&'static str>,
    pub weeks: Vec<Vec<MonthCell<'a>>>,
}

/// Day names starting from `first_day_of_week` (0 = Sunday).
pub fn weekday_labels(first_day_of_week: u8) -> Vec<&'static str> {
    const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let start = first_day_of_week as usize;
    (0..7).map(|offset| DAYS[(start + offset) % 7]).collect()
}

pub fn build_month_view<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    anchor: NaiveDate,
    first_day_of_week: u8,
    metrics: &CellMetrics,
    zone: &Tz,
) -> MonthView<'a> {
    let days = month_grid_days(anchor, first_day_of_week);

    let weeks = chunk_weeks(&days)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|date| {
                    let cell_events = all_events_for_day(events, date, zone);

                    let visible_count = visible_event_count(cell_events.len(), metrics);
                    MonthCell {
                        date,
                        in_month: is_same_month(date, anchor),
                        is_weekend: is_weekend(date),
                        hidden_count: cell_events.len() - visible_count,
                        visible_count,
                        events: cell_events,
                    }
                })
                .collect()
        })
        .collect();

    MonthView {
        month: anchor.with_day(1).unwrap_or(anchor),
        weekday_labels: weekday_labels(first_day_of_week),
        weeks,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniMonthDay {
    pub date: NaiveDate,
    pub in_month: bool,
    /// Only ever set for days inside the month.
    pub has_events: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniMonth {
    pub month: NaiveDate,
    pub weeks: Vec<Vec<MiniMonthDay>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearView {
    pub year: i32,
    pub weekday_labels: Vec<&'static str>,
    pub months: Vec<MiniMonth>,
}

pub fn build_year_view<Tz: TimeZone>(
    events: &[CalendarEvent],
    anchor: NaiveDate,
    first_day_of_week: u8,
    zone: &Tz,
) -> YearView {
    let months = months_of_year(anchor.year())
        .into_iter()
        .map(|month| {
            let days: Vec<MiniMonthDay> = month_grid_days(month, first_day_of_week)
                .into_iter()
                .map(|date| {
                    let in_month = is_same_month(date, month);
                    MiniMonthDay {
                        date,
                        in_month,
                        has_events: in_month && !events_for_day(events, date, zone).is_empty(),
                    }
                })
                .collect();

            MiniMonth {
                month,
                weeks: days.chunks(7).map(<[MiniMonthDay]>::to_vec).collect(),
            }
        })
        .collect();

    YearView {
        year: anchor.year(),
        weekday_labels: weekday_labels(first_day_of_week),
        months,
    }
}
