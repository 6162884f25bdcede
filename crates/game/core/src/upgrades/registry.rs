use std::collections::{BTreeMap, HashMap};

use super::UpgradeDefinition;
use super::catalog;
use crate::error::{ErrorKind, GameError, Result};

/// Current level of every upgrade the player has bought.
///
/// Any id that is absent reads as level 0. Reads never insert.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerUpgradeLevels(BTreeMap<String, u32>);

impl PlayerUpgradeLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> u32 {
        self.0.get(id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: impl Into<String>, level: u32) {
        self.0.insert(id.into(), level);
    }

    /// Raises the level of `id` by one and returns the new level.
    pub fn increment(&mut self, id: &str) -> u32 {
        let level = self.0.entry(id.to_string()).or_insert(0);
        *level = level.saturating_add(1);
        *level
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(id, level)| (id.as_str(), *level))
    }
}

/// Upgrade catalog plus the player's levels.
///
/// Only the levels are serialized. After deserializing, the catalog is empty
/// and [`register_catalog`](Self::register_catalog) must run before any
/// purchase or cost lookup.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeRegistry {
    #[cfg_attr(feature = "serde", serde(skip))]
    catalog: HashMap<&'static str, UpgradeDefinition>,
    levels: PlayerUpgradeLevels,
}

impl UpgradeRegistry {
    /// Creates a registry with the built-in catalog and no levels.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_catalog();
        registry
    }

    /// Rebuilds the catalog from the built-in definitions.
    ///
    /// Player levels are left untouched.
    pub fn register_catalog(&mut self) {
        self.catalog.clear();
        for definition in catalog::builtin() {
            self.catalog.insert(definition.id, definition);
        }
    }

    pub fn catalog_is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn get_upgrade(&self, id: &str) -> Result<&UpgradeDefinition> {
        self.catalog
            .get(id)
            .ok_or(GameError::new(ErrorKind::UpgradeNotFound))
    }

    /// Current level for `id`; unknown ids read as 0.
    pub fn player_level(&self, id: &str) -> u32 {
        self.levels.get(id)
    }

    /// Cost of the next level, or `None` once the upgrade is maxed.
    pub fn next_cost(&self, id: &str) -> Result<Option<u64>> {
        let definition = self.get_upgrade(id)?;
        let level = self.player_level(id);
        Ok((!definition.is_maxed(level)).then(|| definition.cost_at(level)))
    }

    /// Every definition, in no particular order.
    pub fn all_upgrades(&self) -> impl Iterator<Item = &UpgradeDefinition> + '_ {
        self.catalog.values()
    }

    /// Every definition sorted by id, for consumers that need a stable order.
    pub fn sorted_upgrades(&self) -> Vec<&UpgradeDefinition> {
        let mut upgrades: Vec<_> = self.catalog.values().collect();
        upgrades.sort_by_key(|definition| definition.id);
        upgrades
    }

    pub fn levels(&self) -> &PlayerUpgradeLevels {
        &self.levels
    }

    pub(crate) fn levels_mut(&mut self) -> &mut PlayerUpgradeLevels {
        &mut self.levels
    }
}
