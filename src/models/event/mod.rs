// Event module
// Calendar event snapshot as delivered by the host application's data layer

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as seen by the layout engine.
///
/// Instants are stored in UTC; calendar-day questions (which day does the
/// event start on, does it cross midnight) are always answered in a display
/// time zone supplied by the caller. Title and the other descriptive fields
/// are carried through untouched and never inspected by the layout code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    /// Create a new timed event with required fields
    ///
    /// # Arguments
    /// * `id` - Opaque, stable identifier (required, non-empty)
    /// * `title` - Display title
    /// * `start` - Event start instant
    /// * `end` - Event end instant (may equal `start`)
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::CalendarEvent;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
    /// let event = CalendarEvent::new("evt-1", "Standup", start, end).unwrap();
    /// assert!(!event.all_day);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            description: None,
            location: None,
            color: None,
            start,
            end,
            all_day: false,
        };

        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Validate the event.
    ///
    /// The layout engine never calls this; it is offered to the data layer so
    /// bad records can be rejected before they reach a view.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.end < self.start {
            return Err("Event end time cannot be before start time".to_string());
        }

        if let Some(ref color) = self.color {
            if color.starts_with('#') && color.len() != 7 && color.len() != 4 {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Calendar date the event starts on, as seen in `zone`.
    pub fn start_date<Tz: TimeZone>(&self, zone: &Tz) -> NaiveDate {
        self.start.with_timezone(zone).date_naive()
    }

    /// Calendar date the event ends on, as seen in `zone`.
    pub fn end_date<Tz: TimeZone>(&self, zone: &Tz) -> NaiveDate {
        self.end.with_timezone(zone).date_naive()
    }

    /// True when start and end fall on different calendar days, whatever the
    /// `all_day` flag says.
    pub fn is_multi_day<Tz: TimeZone>(&self, zone: &Tz) -> bool {
        self.start_date(zone) != self.end_date(zone)
    }
}

/// Builder for creating events with optional fields
pub struct CalendarEventBuilder {
    id: Option<String>,
    title: String,
    description: Option<String>,
    location: Option<String>,
    color: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    all_day: bool,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: None,
            location: None,
            color: None,
            start: None,
            end: None,
            all_day: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the event color label (hex or a named palette entry)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = CalendarEvent {
            id,
            title: self.title,
            description: self.description,
            location: self.location,
            color: self.color,
            start,
            end,
            all_day: self.all_day,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
