//! Chronological ordering of timed events before packing.

use std::cmp::Ordering;

use crate::models::event::CalendarEvent;

/// Start ascending, then end descending: among events that start together
/// the longest goes first and lands in the leftmost column.
pub fn compare_chronologically(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.start.cmp(&b.start).then_with(|| b.end.cmp(&a.end))
}

/// Stable sort; full ties keep their input order.
pub fn sort_chronologically(events: &mut [&CalendarEvent]) {
    events.sort_by(|a, b| compare_chronologically(a, b));
}
