//! Calendar event service entry point.
//! Wraps an event source and offers the lookups the views need.

pub mod queries;
pub mod source;

use source::EventSource;

/// Read-only access to the events of an [`EventSource`].
pub struct EventService<'a> {
    pub(crate) source: &'a dyn EventSource,
}

impl<'a> EventService<'a> {
    pub fn new(source: &'a dyn EventSource) -> Self {
        Self { source }
    }
}
