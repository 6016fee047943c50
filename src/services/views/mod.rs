//! View adapters.
//!
//! Each calendar view works out its own window of days and asks the layout
//! engine (or the event queries) for what to show on each of them. The
//! result is a plain, serializable view model; painting it is up to the host.

pub mod agenda;
pub mod month;
pub mod time_grid;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::models::event::CalendarEvent;
use crate::models::settings::{LayoutConfig, Settings, SettingsError};
use crate::models::ui::ViewType;
use crate::utils::date::{consecutive_days, days_between, month_grid_days, week_start};

use agenda::{build_agenda_view, build_schedule_view, AgendaView, ScheduleView};
use month::{build_month_view, build_year_view, CellMetrics, MonthView, YearView};
use time_grid::{build_time_grid, TimeGridView};

const FOUR_DAY_SPAN: u32 = 4;
const WEEK_SPAN: u32 = 7;

/// Everything the view adapters need besides the events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    pub layout: LayoutConfig,
    pub cell_metrics: CellMetrics,
    pub first_day_of_week: u8,
    pub agenda_days: u32,
    pub schedule_days: u32,
}

impl ViewContext {
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        Ok(Self {
            layout: settings.layout_config()?,
            cell_metrics: CellMetrics {
                content_height: settings.month_cell_content_height,
                event_height: settings.event_height,
                event_gap: settings.event_gap,
            },
            first_day_of_week: settings.first_day_of_week,
            agenda_days: settings.agenda_days,
            schedule_days: settings.schedule_days,
        })
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            layout: LayoutConfig::default(),
            cell_metrics: CellMetrics {
                content_height: settings.month_cell_content_height,
                event_height: settings.event_height,
                event_gap: settings.event_gap,
            },
            first_day_of_week: settings.first_day_of_week,
            agenda_days: settings.agenda_days,
            schedule_days: settings.schedule_days,
        }
    }
}

/// Days displayed by `view` when it is anchored on `anchor`.
pub fn view_window(view: ViewType, anchor: NaiveDate, ctx: &ViewContext) -> Vec<NaiveDate> {
    match view {
        ViewType::Day => vec![anchor],
        ViewType::FourDay => consecutive_days(anchor, FOUR_DAY_SPAN),
        ViewType::Week => consecutive_days(week_start(anchor, ctx.first_day_of_week), WEEK_SPAN),
        ViewType::Month => month_grid_days(anchor, ctx.first_day_of_week),
        ViewType::Year => match (
            NaiveDate::from_ymd_opt(anchor.year(), 1, 1),
            NaiveDate::from_ymd_opt(anchor.year(), 12, 31),
        ) {
            (Some(first), Some(last)) => days_between(first, last),
            _ => Vec::new(),
        },
        ViewType::Agenda => consecutive_days(anchor, ctx.agenda_days),
        ViewType::Schedule => consecutive_days(anchor, ctx.schedule_days),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum CalendarView<'a> {
    Day(TimeGridView<'a>),
    FourDay(TimeGridView<'a>),
    Week(TimeGridView<'a>),
    Month(MonthView<'a>),
    Year(YearView),
    Agenda(AgendaView<'a>),
    Schedule(ScheduleView<'a>),
}

impl CalendarView<'_> {
    pub fn view_type(&self) -> ViewType {
        match self {
            CalendarView::Day(_) => ViewType::Day,
            CalendarView::FourDay(_) => ViewType::FourDay,
            CalendarView::Week(_) => ViewType::Week,
            CalendarView::Month(_) => ViewType::Month,
            CalendarView::Year(_) => ViewType::Year,
            CalendarView::Agenda(_) => ViewType::Agenda,
            CalendarView::Schedule(_) => ViewType::Schedule,
        }
    }
}

/// Build the model for `view` anchored on `anchor`. `now` drives the current
/// time indicator of the hour-grid views.
pub fn build_view<'a>(
    view: ViewType,
    anchor: NaiveDate,
    events: &'a [CalendarEvent],
    ctx: &ViewContext,
    now: DateTime<Utc>,
) -> CalendarView<'a> {
    let zone = &ctx.layout.timezone;
    let days = view_window(view, anchor, ctx);
    log::debug!(
        "building {} view for {} ({} days, {} events)",
        view,
        anchor,
        days.len(),
        events.len()
    );

    match view {
        ViewType::Day => CalendarView::Day(build_time_grid(events, &days, &ctx.layout, now)),
        ViewType::FourDay => {
            CalendarView::FourDay(build_time_grid(events, &days, &ctx.layout, now))
        }
        ViewType::Week => CalendarView::Week(build_time_grid(events, &days, &ctx.layout, now)),
        ViewType::Month => CalendarView::Month(build_month_view(
            events,
            anchor,
            ctx.first_day_of_week,
            &ctx.cell_metrics,
            zone,
        )),
        ViewType::Year => {
            CalendarView::Year(build_year_view(events, anchor, ctx.first_day_of_week, zone))
        }
        ViewType::Agenda => CalendarView::Agenda(build_agenda_view(events, &days, zone)),
        ViewType::Schedule => CalendarView::Schedule(build_schedule_view(events, &days, zone)),
    }
}
