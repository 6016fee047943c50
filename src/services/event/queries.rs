//! Day-level event lookups used by the non-grid views.

use chrono::{NaiveDate, TimeZone};

use super::EventService;
use crate::models::event::CalendarEvent;
use crate::services::layout::{is_banner_event, spans_day};
use anyhow::Result;

fn sort_by_start(events: &mut [&CalendarEvent]) {
    events.sort_by(|a, b| a.start.cmp(&b.start));
}

/// Events starting on `day`, ordered by start.
pub fn events_for_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    let mut found: Vec<&CalendarEvent> = events
        .iter()
        .filter(|event| event.start_date(zone) == day)
        .collect();
    sort_by_start(&mut found);
    found
}

/// Banner events that started on an earlier day and are still running on
/// `day` (continuation bars in a month cell).
pub fn spanning_events_for_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| is_banner_event(event, zone))
        .filter(|event| event.start_date(zone) != day && spans_day(event, day, zone))
        .collect()
}

/// Continuations plus events starting on `day`, ordered by start.
pub fn all_events_for_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    let mut found = spanning_events_for_day(events, day, zone);
    found.extend(events_for_day(events, day, zone));
    sort_by_start(&mut found);
    found
}

/// Every event touching `day`, ordered by start.
pub fn agenda_events_for_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    zone: &Tz,
) -> Vec<&'a CalendarEvent> {
    let mut found: Vec<&CalendarEvent> = events
        .iter()
        .filter(|event| spans_day(event, day, zone))
        .collect();
    sort_by_start(&mut found);
    found
}

/// Filter events by color label if a filter is active.
/// If filter is None, all events pass through.
pub fn filter_events_by_color(events: Vec<CalendarEvent>, filter: Option<&str>) -> Vec<CalendarEvent> {
    match filter {
        None => events,
        Some(color) => events
            .into_iter()
            .filter(|e| e.color.as_deref() == Some(color))
            .collect(),
    }
}

impl EventService<'_> {
    /// List every event ordered by start.
    pub fn list_all(&self) -> Result<Vec<CalendarEvent>> {
        let mut events = self.source.load()?;
        events.sort_by(|a, b| a.start.cmp(&b.start));
        Ok(events)
    }

    /// Search events by title, description or location.
    pub fn search(&self, query: &str) -> Result<Vec<CalendarEvent>> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }

        let needle = query.to_lowercase();
        let matches = |field: Option<&str>| {
            field
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        };

        Ok(self
            .list_all()?
            .into_iter()
            .filter(|event| {
                matches(Some(event.title.as_str()))
                    || matches(event.description.as_deref())
                    || matches(event.location.as_deref())
            })
            .collect())
    }

    /// Events touching any day from `start` to `end` inclusive.
    pub fn find_by_date_range<Tz: TimeZone>(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        zone: &Tz,
    ) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|event| event.start_date(zone) <= end && event.end_date(zone) >= start)
            .collect())
    }
}
