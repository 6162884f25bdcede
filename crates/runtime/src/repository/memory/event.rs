//! In-memory event store implementation.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use clicker_core::Event;

use crate::repository::{EventStore, RepositoryError, Result};

/// In-memory event store for testing and development.
///
/// Thread-safe but not persistent across process restarts. Writes can be
/// made to fail on demand to exercise the persistence-failure path.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    fail_writes: AtomicBool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, e.g. to replay a hand-written history.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Get all events (for testing/debugging).
    pub fn events(&self) -> Result<Vec<Event>> {
        let events = self
            .events
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(events.clone())
    }

    pub fn len(&self) -> usize {
        self.events.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When set, every subsequent `save_event` fails with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl EventStore for InMemoryEventStore {
    fn save_event(&self, event: &Event) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::other(
                "event store rejected write",
            )));
        }

        let mut events = self
            .events
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        events.push(event.clone());
        Ok(())
    }

    fn load_events(&self) -> Result<Vec<Event>> {
        self.events()
    }
}
