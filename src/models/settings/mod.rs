// Settings module
// Display preferences for the calendar views and the layout engine

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ui::ViewType;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("day start hour {start} must be before day end hour {end}")]
    InvalidHourWindow { start: u32, end: u32 },
    #[error("day end hour {0} is past 24")]
    HourOutOfRange(u32),
    #[error("row height must be positive, got {0}")]
    InvalidRowHeight(f64),
    #[error("{field} cannot be negative, got {value}")]
    NegativeDimension { field: &'static str, value: f64 },
    #[error("first day of week must be 0 (Sunday) to 6 (Saturday), got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("{field} must be at least one day")]
    EmptyRange { field: &'static str },
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
    #[error("unknown view '{0}'")]
    UnknownView(String),
}

/// Settings as stored in `settings.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    /// Pixel height of one hour row in the time grid.
    pub row_height: f64,
    pub min_event_height: f64,
    /// Height of one event chip in a month cell.
    pub event_height: f64,
    pub event_gap: f64,
    /// Measured content height of a month cell; unset means "show everything".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_cell_content_height: Option<f64>,
    pub first_day_of_week: u8, // 0 = Sunday
    pub agenda_days: u32,
    pub schedule_days: u32,
    pub timezone: String,
    pub default_view: String,
    pub column_width_mode: ColumnWidthMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_start_hour: 0,
            day_end_hour: 24,
            row_height: 64.0,
            min_event_height: 24.0,
            event_height: 24.0,
            event_gap: 4.0,
            month_cell_content_height: None,
            first_day_of_week: 0,
            agenda_days: 30,
            schedule_days: 7,
            timezone: "UTC".to_string(),
            default_view: "week".to_string(),
            column_width_mode: ColumnWidthMode::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.day_end_hour > 24 {
            return Err(SettingsError::HourOutOfRange(self.day_end_hour));
        }
        if self.day_start_hour >= self.day_end_hour {
            return Err(SettingsError::InvalidHourWindow {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }
        if self.row_height.is_nan() || self.row_height <= 0.0 {
            return Err(SettingsError::InvalidRowHeight(self.row_height));
        }

        for (field, value) in [
            ("min_event_height", self.min_event_height),
            ("event_height", self.event_height),
            ("event_gap", self.event_gap),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(SettingsError::NegativeDimension { field, value });
            }
        }

        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        if self.agenda_days == 0 {
            return Err(SettingsError::EmptyRange { field: "agenda_days" });
        }
        if self.schedule_days == 0 {
            return Err(SettingsError::EmptyRange { field: "schedule_days" });
        }

        self.time_zone()?;
        self.view_type()?;
        Ok(())
    }

    pub fn time_zone(&self) -> Result<Tz, SettingsError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| SettingsError::UnknownTimeZone(self.timezone.clone()))
    }

    pub fn view_type(&self) -> Result<ViewType, SettingsError> {
        self.default_view
            .parse::<ViewType>()
            .map_err(|_| SettingsError::UnknownView(self.default_view.clone()))
    }

    /// Derive the layout engine configuration from validated settings.
    pub fn layout_config(&self) -> Result<LayoutConfig, SettingsError> {
        self.validate()?;
        Ok(LayoutConfig {
            day_start_hour: self.day_start_hour,
            day_end_hour: self.day_end_hour,
            row_height: self.row_height,
            min_event_height: self.min_event_height,
            timezone: self.time_zone()?,
            column_width_mode: self.column_width_mode,
        })
    }
}

/// How the column packer assigns widths to overlapping events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidthMode {
    /// Each event takes `100 / columns` using the column count at the moment
    /// it is placed. Earlier events keep their wider boxes.
    #[default]
    Progressive,
    /// Every event of the day shares `100 / final column count`.
    Settled,
}

/// Inputs of a single layout pass besides the events themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub row_height: f64,
    pub min_event_height: f64,
    /// Zone in which calendar days and times of day are evaluated.
    pub timezone: Tz,
    pub column_width_mode: ColumnWidthMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_start_hour: 0,
            day_end_hour: 24,
            row_height: 64.0,
            min_event_height: 24.0,
            timezone: Tz::UTC,
            column_width_mode: ColumnWidthMode::Progressive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.view_type().unwrap(), ViewType::Week);
    }

    #[test]
    fn test_default_layout_config_matches_settings() {
        let config = Settings::default().layout_config().unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_inverted_hour_window_rejected() {
        let settings = Settings {
            day_start_hour: 18,
            day_end_hour: 8,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidHourWindow { start: 18, end: 8 })
        );
    }

    #[test]
    fn test_end_hour_past_midnight_rejected() {
        let settings = Settings {
            day_end_hour: 25,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::HourOutOfRange(25)));
    }

    #[test]
    fn test_non_positive_row_height_rejected() {
        let settings = Settings {
            row_height: 0.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidRowHeight(_))
        ));
    }

    #[test]
    fn test_negative_event_gap_rejected() {
        let settings = Settings {
            event_gap: -1.0,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NegativeDimension {
                field: "event_gap",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_unknown_time_zone_rejected() {
        let settings = Settings {
            timezone: "Mars/Olympus_Mons".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::UnknownTimeZone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn test_zero_schedule_days_rejected() {
        let settings = Settings {
            schedule_days: 0,
            ..Settings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::EmptyRange { field: "schedule_days" })
        );
    }

    #[test]
    fn test_layout_config_uses_named_zone() {
        let settings = Settings {
            timezone: "Australia/Brisbane".to_string(),
            day_start_hour: 6,
            ..Settings::default()
        };
        let config = settings.layout_config().unwrap();
        assert_eq!(config.timezone, chrono_tz::Australia::Brisbane);
        assert_eq!(config.day_start_hour, 6);
    }
}
