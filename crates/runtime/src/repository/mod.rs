//! Repository layer for persisted game data.
//!
//! Two kinds of data leave the process:
//! - the append-only event history, through an [`EventStore`]
//! - whole-state snapshots for save/load, through a [`SnapshotRepository`]
//!
//! Both have a file-backed and an in-memory implementation.

mod error;
mod file;
mod memory;
mod record;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileEventStore, FileSnapshotRepository};
pub use memory::{InMemoryEventStore, InMemorySnapshotRepository};
pub use record::EventRecord;
pub use traits::{EventStore, SnapshotRepository};
