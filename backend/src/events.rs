//! Registry event logging
//!
//! The registry records what it does (store loads, preloads, lazily created
//! instances) as typed events instead of formatted text, so callers and tests
//! can query them.
//!
//! # Example
//!
//! ```rust
//! use tuned_rng_core_rs::events::{EventLog, RegistryEvent};
//!
//! let mut log = EventLog::new();
//! log.log(RegistryEvent::StoreLoaded { entries: 3 });
//! assert_eq!(log.events_of_type("StoreLoaded").len(), 1);
//! ```

use crate::rng::ShiftPair;
use crate::tuning::RangeKey;

/// Where a lazily created generator's record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    /// Persisted tuning table
    Store,
    /// Synthesized fallback record
    Default,
}

/// Registry event
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// Persisted table read successfully
    StoreLoaded { entries: usize },

    /// Persisted table unreadable; the registry continues with no records
    StoreLoadFailed { reason: String },

    /// Generator built eagerly from a persisted record
    Preloaded {
        range: RangeKey,
        seed: i64,
        increment: i64,
        score: f64,
    },

    /// Generator built on first request for a range
    Created {
        range: RangeKey,
        shift_pair: ShiftPair,
        source: RecordSource,
    },
}

impl RegistryEvent {
    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RegistryEvent::StoreLoaded { .. } => "StoreLoaded",
            RegistryEvent::StoreLoadFailed { .. } => "StoreLoadFailed",
            RegistryEvent::Preloaded { .. } => "Preloaded",
            RegistryEvent::Created { .. } => "Created",
        }
    }

    /// Get the range if the event concerns a single generator
    pub fn range(&self) -> Option<RangeKey> {
        match self {
            RegistryEvent::Preloaded { range, .. } => Some(*range),
            RegistryEvent::Created { range, .. } => Some(*range),
            _ => None,
        }
    }
}

/// Append-only list of registry events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RegistryEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: RegistryEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<&RegistryEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn events_for_range(&self, range: RangeKey) -> Vec<&RegistryEvent> {
        self.events
            .iter()
            .filter(|e| e.range() == Some(range))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
