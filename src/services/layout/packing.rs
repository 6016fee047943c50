//! Greedy column packing for one day of timed events.
//!
//! Events are taken in chronological order. Each goes into the first column
//! whose last occupant has ended by the event's start, or into a new column
//! on the right. In progressive mode the width is `100 / columns` using the
//! column count at placement time, so an event placed before a later overlap
//! was discovered keeps its wider box.

use chrono::{DateTime, Utc};

use super::time_scale::{duration_minutes, event_height, minutes_from_day_start, top_offset};
use crate::models::event::CalendarEvent;
use crate::models::layout::PositionedEvent;
use crate::models::settings::{ColumnWidthMode, LayoutConfig};

/// Place `sorted` events into columns. Input must already be in
/// chronological order; output is one entry per input event, same order.
pub fn pack_columns<'a>(
    sorted: &[&'a CalendarEvent],
    config: &LayoutConfig,
) -> Vec<PositionedEvent<'a>> {
    // End instant of the latest event in each column.
    let mut column_ends: Vec<DateTime<Utc>> = Vec::new();
    let mut positioned = Vec::with_capacity(sorted.len());

    for &event in sorted {
        let local_start = event.start.with_timezone(&config.timezone);
        let top = top_offset(
            minutes_from_day_start(&local_start, config.day_start_hour),
            config.row_height,
        );
        let height = event_height(
            duration_minutes(event),
            config.row_height,
            config.min_event_height,
        );

        let column = match column_ends.iter().position(|end| *end <= event.start) {
            Some(index) => {
                column_ends[index] = event.end;
                index
            }
            None => {
                column_ends.push(event.end);
                column_ends.len() - 1
            }
        };

        let width = 100.0 / column_ends.len() as f64;

        positioned.push(PositionedEvent {
            event,
            top,
            height,
            left: column as f64 * width,
            width,
            z_index: column,
            column,
        });
    }

    if config.column_width_mode == ColumnWidthMode::Settled && !column_ends.is_empty() {
        let width = 100.0 / column_ends.len() as f64;
        for placed in &mut positioned {
            placed.width = width;
            placed.left = placed.column as f64 * width;
        }
    }

    log::trace!(
        "packed {} events into {} columns",
        positioned.len(),
        column_ends.len()
    );

    positioned
}
