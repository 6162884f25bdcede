//! Repository contracts for event history and state snapshots.

use clicker_core::{Event, GameState};

use super::Result;

/// Append-only persistence of domain events.
///
/// Implementations must be safe to share between threads: every append and
/// every full load is serialized against the others.
pub trait EventStore: Send + Sync {
    /// Appends one event to the end of the history.
    fn save_event(&self, event: &Event) -> Result<()>;

    /// Returns the complete history in append order.
    ///
    /// An empty history is not an error. Any undecodable record fails the
    /// whole load; no partial list is returned.
    fn load_events(&self) -> Result<Vec<Event>>;
}

/// Persistence of whole-state snapshots.
pub trait SnapshotRepository: Send + Sync {
    /// Overwrites the stored snapshot.
    fn save(&self, state: &GameState) -> Result<()>;

    /// Loads the stored snapshot, or `None` if nothing has been saved.
    ///
    /// The returned state has no upgrade catalog; callers must run
    /// [`GameState::register_catalog`] before using it.
    fn load(&self) -> Result<Option<GameState>>;
}
