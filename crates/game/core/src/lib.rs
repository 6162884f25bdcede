//! Deterministic rules and data types for the rock clicker.
//!
//! `clicker-core` defines the canonical game state (rock, player, upgrade
//! levels, end-game flags), the closed set of domain events, the upgrade
//! catalog, and the error taxonomy. It performs no I/O: persistence, handler
//! routing and session orchestration live in `clicker-runtime`.
//!
//! All gameplay mutation is expressed as an [`Event`] and applied through the
//! `apply_*` methods on [`GameState`]; the only other writers are the
//! scenario presets and the explicit endings.
pub mod config;
pub mod error;
pub mod events;
pub mod flavor;
pub mod scenario;
pub mod state;
pub mod upgrades;

pub use config::GameConfig;
pub use error::{ErrorKind, GameError, Result};
pub use events::{ClickEvent, DamageUpgradedEvent, Event, EventKind, UpgradePurchasedEvent};
pub use scenario::Scenario;
pub use state::{GameState, Player, Rock};
pub use upgrades::{CostCurve, PlayerUpgradeLevels, UpgradeDefinition, UpgradeEffect, UpgradeRegistry};
