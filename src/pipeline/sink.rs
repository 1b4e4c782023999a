//! Destinations for run events.

use crate::logger::{self, Event};

/// Receives progress events as a run advances.
pub trait EventSink {
    fn event(&mut self, event: Event);
}

/// Prints every event to stdout.
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn event(&mut self, event: Event) {
        logger::emit(&event);
    }
}

/// Collects events in memory.
impl EventSink for Vec<Event> {
    fn event(&mut self, event: Event) {
        self.push(event);
    }
}
