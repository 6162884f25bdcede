//! Purchasable upgrades: catalog, cost curves, effects and per-player levels.
//!
//! Definitions are static data built by [`UpgradeRegistry::register_catalog`].
//! Behavior is expressed as small data enums ([`CostCurve`],
//! [`UpgradeEffect`]) interpreted in one place, so the catalog can be rebuilt
//! at any time without serializing anything but the player's levels.
mod catalog;
mod definition;
mod registry;

pub use catalog::{AUTO_CLICKER_V0_1, AUTO_CLICKER_V1_0, HEART_OF_THE_MOUNTAIN, STRONGER_PICKAXE};
pub use definition::{CostCurve, UpgradeDefinition, UpgradeEffect};
pub use registry::{PlayerUpgradeLevels, UpgradeRegistry};
