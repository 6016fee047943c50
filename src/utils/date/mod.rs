// Date utility functions
// Calendar-day arithmetic shared by the layout engine and the view adapters

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Start of the week containing `date`.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

/// Last day of the week containing `date`.
pub fn week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    week_start(date, first_day_of_week) + Duration::days(6)
}

/// `count` consecutive days beginning with `start`.
pub fn consecutive_days(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    start.iter_days().take(count as usize).collect()
}

/// Every day from `start` to `end`, both inclusive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(NaiveDate::MAX)
}

/// First day of each month of `year`, January first.
pub fn months_of_year(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Days of a month grid: whole weeks from the week containing the first of
/// the month to the week containing its last day.
pub fn month_grid_days(month: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    let grid_start = week_start(first_of_month(month), first_day_of_week);
    let grid_end = week_end(last_of_month(month), first_day_of_week);
    days_between(grid_start, grid_end)
}

/// Split a run of days into rows of seven. The last row may be shorter.
pub fn chunk_weeks(days: &[NaiveDate]) -> Vec<Vec<NaiveDate>> {
    days.chunks(7).map(<[NaiveDate]>::to_vec).collect()
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
