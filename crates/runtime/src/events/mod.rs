//! Event routing between gameplay and persistence.
//!
//! The event vocabulary itself lives in `clicker-core`; this module only
//! decides where each event goes.

mod dispatcher;

pub use clicker_core::{Event, EventKind};
pub use dispatcher::{EventDispatcher, Handler};
