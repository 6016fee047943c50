// Test fixtures - reusable test data
// Events for a sample week (Mon Jan 13 - Sun Jan 19, 2025, UTC)

#![allow(dead_code)]

use calendar_layout::models::event::CalendarEvent;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday of the sample week
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    /// Wednesday of the sample week
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Returns a UTC instant on a day of January 2025
    pub fn jan(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::jan;
    use super::*;

    pub fn timed(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent::builder()
            .id(id)
            .title(id)
            .start(start)
            .end(end)
            .build()
            .unwrap()
    }

    pub fn all_day(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent::builder()
            .id(id)
            .title(id)
            .start(start)
            .end(end)
            .all_day(true)
            .build()
            .unwrap()
    }

    /// A busy Wednesday plus a conference running Tuesday to Thursday
    pub fn sample_week() -> Vec<CalendarEvent> {
        vec![
            timed("standup", jan(15, 9, 0), jan(15, 9, 15)),
            timed("design-review", jan(15, 9, 0), jan(15, 11, 0)),
            timed("pairing", jan(15, 9, 30), jan(15, 10, 30)),
            timed("lunch", jan(15, 12, 0), jan(15, 13, 0)),
            timed("gym", jan(13, 18, 0), jan(13, 19, 0)),
            all_day("conference", jan(14, 0, 0), jan(16, 0, 0)),
            all_day("holiday", jan(17, 0, 0), jan(17, 0, 0)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::monday().weekday(), chrono::Weekday::Mon);
        assert_eq!(dates::wednesday().day(), 15);
    }

    #[test]
    fn test_fixture_events_are_valid() {
        let events = events::sample_week();
        assert_eq!(events.len(), 7);
        assert!(events.iter().all(|event| event.validate().is_ok()));
    }
}
