//! Session orchestration and persistence for the rock clicker.
//!
//! This crate wires the pure rules of `clicker-core` to the outside world.
//! Consumers embed [`GameSession`] to click, buy upgrades, save and replay.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the aggregate root and its builder
//! - [`events`] routes events to handlers and the event store
//! - [`handlers`] holds the state handlers shared by live play and replay
//! - [`repository`] provides the event log and snapshot adapters
//! - [`config`] loads runtime settings from the environment
pub mod config;
pub mod events;
pub mod handlers;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use events::{EventDispatcher, Handler};
pub use repository::{
    EventRecord, EventStore, FileEventStore, FileSnapshotRepository, InMemoryEventStore,
    InMemorySnapshotRepository, RepositoryError, SnapshotRepository,
};
pub use session::{GameSession, GameSessionBuilder};
