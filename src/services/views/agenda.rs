//! List-style view models: agenda and schedule.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeZone, Timelike};
use serde::Serialize;

use crate::models::event::CalendarEvent;
use crate::services::event::queries::agenda_events_for_day;

/// The schedule header shows at most a week of day columns.
const SCHEDULE_HEADER_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDay<'a> {
    pub date: NaiveDate,
    pub events: Vec<&'a CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaView<'a> {
    /// Only days that have at least one event.
    pub days: Vec<AgendaDay<'a>>,
}

impl AgendaView<'_> {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub fn build_agenda_view<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
    zone: &Tz,
) -> AgendaView<'a> {
    let days = days
        .iter()
        .map(|date| AgendaDay {
            date: *date,
            events: agenda_events_for_day(events, *date, zone),
        })
        .filter(|day| !day.events.is_empty())
        .collect();

    AgendaView { days }
}

/// Events of one day that share a starting hour. `hour` is `None` for the
/// all-day group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourGroup<'a> {
    pub hour: Option<u32>,
    pub events: Vec<&'a CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay<'a> {
    pub date: NaiveDate,
    /// All-day group first, then hours ascending.
    pub groups: Vec<HourGroup<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleHeaderDay {
    pub date: NaiveDate,
    pub event_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView<'a> {
    pub header: Vec<ScheduleHeaderDay>,
    pub days: Vec<ScheduleDay<'a>>,
}

impl ScheduleView<'_> {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Group a day's events by the hour they start. Events running in from an
/// earlier day still group under their own start hour.
pub fn group_by_hour<'a, Tz: TimeZone>(
    events: Vec<&'a CalendarEvent>,
    zone: &Tz,
) -> Vec<HourGroup<'a>> {
    let mut groups: BTreeMap<Option<u32>, Vec<&'a CalendarEvent>> = BTreeMap::new();
    for event in events {
        let hour = (!event.all_day).then(|| event.start.with_timezone(zone).hour());
        groups.entry(hour).or_default().push(event);
    }

    groups
        .into_iter()
        .map(|(hour, events)| HourGroup { hour, events })
        .collect()
}

pub fn build_schedule_view<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
    zone: &Tz,
) -> ScheduleView<'a> {
    let per_day: Vec<(NaiveDate, Vec<&'a CalendarEvent>)> = days
        .iter()
        .map(|date| (*date, agenda_events_for_day(events, *date, zone)))
        .collect();

    let header = per_day
        .iter()
        .take(SCHEDULE_HEADER_DAYS)
        .map(|(date, day_events)| ScheduleHeaderDay {
            date: *date,
            event_count: day_events.len(),
        })
        .collect();

    let days = per_day
        .into_iter()
        .filter(|(_, day_events)| !day_events.is_empty())
        .map(|(date, day_events)| ScheduleDay {
            date,
            groups: group_by_hour(day_events, zone),
        })
        .collect();

    ScheduleView { header, days }
}
