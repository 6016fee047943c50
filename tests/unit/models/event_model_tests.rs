// Unit tests for the CalendarEvent model
// Covers validation, JSON snapshot shape and zone-dependent day questions

use calendar_layout::models::event::CalendarEvent;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use test_case::test_case;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, hour, minute, 0).unwrap()
}

#[test_case("#FF5733" => true ; "six digit hex")]
#[test_case("#F53" => true ; "three digit hex")]
#[test_case("#FF57" => false ; "four digit hex")]
#[test_case("blue" => true ; "named color label")]
fn test_color_validation(color: &str) -> bool {
    CalendarEvent::builder()
        .id("evt")
        .start(at(15, 9, 0))
        .end(at(15, 10, 0))
        .color(color)
        .build()
        .is_ok()
}

#[test]
fn test_zero_length_event_is_valid() {
    let event = CalendarEvent::new("evt", "Reminder", at(15, 9, 0), at(15, 9, 0)).unwrap();
    assert_eq!(event.duration().num_minutes(), 0);
}

#[test]
fn test_end_before_start_is_rejected() {
    let result = CalendarEvent::new("evt", "Backwards", at(15, 10, 0), at(15, 9, 0));
    assert_eq!(
        result.unwrap_err(),
        "Event end time cannot be before start time"
    );
}

#[test]
fn test_blank_id_is_rejected() {
    let result = CalendarEvent::new("  ", "No id", at(15, 9, 0), at(15, 10, 0));
    assert!(result.is_err(), "Whitespace id should be rejected");
}

#[test]
fn test_builder_requires_times() {
    let result = CalendarEvent::builder().id("evt").start(at(15, 9, 0)).build();
    assert_eq!(result.unwrap_err(), "Event end time is required");
}

#[test]
fn test_snapshot_json_shape() {
    let json = r#"{
        "id": "evt-1",
        "title": "Offsite",
        "start": "2025-01-14T00:00:00Z",
        "end": "2025-01-16T00:00:00Z",
        "allDay": true
    }"#;

    let event: CalendarEvent = serde_json::from_str(json).unwrap();
    assert!(event.all_day);
    assert_eq!(event.location, None);
    assert!(event.is_multi_day(&Utc));

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["allDay"], true);
    assert!(value.get("color").is_none(), "Unset options are not written");
}

#[test_case("UTC" => false ; "same day in utc")]
#[test_case("Australia/Sydney" => true ; "crosses midnight in sydney")]
#[test_case("America/New_York" => false ; "same day in new york")]
fn test_multi_day_depends_on_zone(zone: &str) -> bool {
    // 10:00-15:00 UTC is 21:00-02:00 the next day in Sydney (UTC+11)
    let zone: Tz = zone.parse().unwrap();
    let event = CalendarEvent::new("evt", "Late call", at(15, 10, 0), at(15, 15, 0)).unwrap();
    event.is_multi_day(&zone)
}
