//! File-backed repositories.

mod log;
mod state;

pub use log::FileEventStore;
pub use state::FileSnapshotRepository;
