//! Layout output types.
//!
//! Everything here borrows the source events; a layout is rebuilt on every
//! pass and never outlives the event snapshot it was computed from.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::event::CalendarEvent;

/// A timed event placed on a day column of the time grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedEvent<'a> {
    pub event: &'a CalendarEvent,
    /// Pixels from the top of the grid (the configured day-start hour).
    pub top: f64,
    /// Pixels, never below the configured minimum event height.
    pub height: f64,
    /// Percent of the day column width.
    pub left: f64,
    /// Percent of the day column width.
    pub width: f64,
    pub z_index: usize,
    pub column: usize,
}

/// An all-day or multi-day event shown in the banner lane for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllDayPlacement<'a> {
    pub event: &'a CalendarEvent,
    pub is_first_day: bool,
    pub is_last_day: bool,
}

/// Layout of a single displayed day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout<'a> {
    pub date: NaiveDate,
    pub all_day: Vec<AllDayPlacement<'a>>,
    pub timed: Vec<PositionedEvent<'a>>,
}

impl DayLayout<'_> {
    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }

    /// Number of columns the packing pass opened for this day.
    pub fn column_count(&self) -> usize {
        self.timed
            .iter()
            .map(|positioned| positioned.column + 1)
            .max()
            .unwrap_or(0)
    }
}
