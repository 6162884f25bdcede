//! In-memory repositories for tests and ephemeral sessions.

mod event;
mod state;

pub use event::InMemoryEventStore;
pub use state::InMemorySnapshotRepository;
