//! Day bucketing: which events belong to a day, and in which lane.
//!
//! The banner lane takes all-day events and anything that crosses midnight.
//! The hour grid takes the rest, on the day they start. The two sets are
//! disjoint for any given day. Filters keep input order.

use chrono::{NaiveDate, TimeZone};

use crate::models::event::CalendarEvent;
use crate::models::layout::AllDayPlacement;

/// True for events that belong in the banner lane rather than the hour grid.
pub fn is_banner_event<Tz: TimeZone>(event: &CalendarEvent, zone: &Tz) -> bool {
    event.all_day || event.is_multi_day(zone)
}

/// Does `event` touch `day`? Starts on it, ends on it, or runs through it.
/// Compared by calendar date, not by instant.
pub fn spans_day<Tz: TimeZone>(event: &CalendarEvent, day: NaiveDate, zone: &Tz) -> bool {
    let start = event.start_date(zone);
    let end = event.end_date(zone);
    start == day || end == day || (start < day && day < end)
}

pub fn all_day_events_for_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| is_banner_event(event, zone) && spans_day(event, day, zone))
        .collect()
}

/// Banner events touching any day of a window, e.g. to decide whether a
/// multi-day header needs an all-day row at all.
pub fn all_day_events_for_days<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| is_banner_event(event, zone))
        .filter(|event| days.iter().any(|day| spans_day(event, *day, zone)))
        .collect()
}

/// Single-day timed events that start on `day`.
pub fn timed_events_for_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.start_date(zone) == day && !is_banner_event(event, zone))
        .collect()
}

/// Banner placements for one day, flagging the first and last day of each
/// event so the lane can draw open or closed ends.
pub fn all_day_placements<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<AllDayPlacement<'a>> {
    all_day_events_for_day(events, day, zone)
        .into_iter()
        .map(|event| AllDayPlacement {
            event,
            is_first_day: event.start_date(zone) == day,
            is_last_day: event.end_date(zone) == day,
        })
        .collect()
}
