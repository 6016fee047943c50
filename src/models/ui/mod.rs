// UI models module
// View selection shared by the settings file, the CLI and the view adapters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewType {
    Day,
    FourDay,
    #[default]
    Week,
    Month,
    Year,
    Agenda,
    Schedule,
}

impl ViewType {
    pub const ALL: [ViewType; 7] = [
        ViewType::Day,
        ViewType::FourDay,
        ViewType::Week,
        ViewType::Month,
        ViewType::Year,
        ViewType::Agenda,
        ViewType::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Day => "day",
            ViewType::FourDay => "four-day",
            ViewType::Week => "week",
            ViewType::Month => "month",
            ViewType::Year => "year",
            ViewType::Agenda => "agenda",
            ViewType::Schedule => "schedule",
        }
    }

    /// Views that place timed events on an hour grid.
    pub fn is_time_grid(&self) -> bool {
        matches!(self, ViewType::Day | ViewType::FourDay | ViewType::Week)
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "day" => Ok(ViewType::Day),
            "fourday" | "4day" => Ok(ViewType::FourDay),
            "week" => Ok(ViewType::Week),
            "month" => Ok(ViewType::Month),
            "year" => Ok(ViewType::Year),
            "agenda" => Ok(ViewType::Agenda),
            "schedule" => Ok(ViewType::Schedule),
            _ => Err(format!("Unknown view type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("day", ViewType::Day)]
    #[test_case("Four-Day", ViewType::FourDay)]
    #[test_case("4day", ViewType::FourDay)]
    #[test_case("four_day", ViewType::FourDay)]
    #[test_case(" WEEK ", ViewType::Week)]
    #[test_case("schedule", ViewType::Schedule)]
    fn test_parse_view_type(input: &str, expected: ViewType) {
        assert_eq!(input.parse::<ViewType>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_view_type() {
        assert!("quarter".parse::<ViewType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for view in ViewType::ALL {
            assert_eq!(view.to_string().parse::<ViewType>().unwrap(), view);
        }
    }

    #[test]
    fn test_time_grid_views() {
        assert!(ViewType::FourDay.is_time_grid());
        assert!(!ViewType::Agenda.is_time_grid());
    }
}
