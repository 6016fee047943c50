use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use crate::models::event::CalendarEvent;

/// Anything that can hand the views a snapshot of events.
///
/// The host application fetches events over its RPC layer; here the
/// boundary is reduced to "give me the current list".
pub trait EventSource {
    fn load(&self) -> Result<Vec<CalendarEvent>>;
}

/// Events kept in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    events: Vec<CalendarEvent>,
}

impl InMemorySource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

impl EventSource for InMemorySource {
    fn load(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self.events.clone())
    }
}

/// A JSON array of events on disk, as exported by the host application.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for JsonSnapshotSource {
    fn load(&self) -> Result<Vec<CalendarEvent>> {
        load_snapshot(&self.path)
    }
}

pub fn load_snapshot(path: &Path) -> Result<Vec<CalendarEvent>> {
    if !path.exists() {
        log::warn!("Event snapshot {} not found, using no events", path.display());
        return Ok(Vec::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events: Vec<CalendarEvent> =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;

    log::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

pub fn save_snapshot(path: &Path, events: &[CalendarEvent]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(events)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize events from {}",
        path.display()
    ))
}
