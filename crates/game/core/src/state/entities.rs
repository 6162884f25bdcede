use crate::config::GameConfig;

/// The shared clickable resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rock {
    pub health: u64,
}

impl Rock {
    pub const fn new(health: u64) -> Self {
        Self { health }
    }

    pub const fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Remaining health as a fraction of a fresh rock, in `0.0..=1.0`.
    pub fn health_fraction(&self) -> f64 {
        (self.health as f64 / GameConfig::INITIAL_ROCK_HEALTH as f64).clamp(0.0, 1.0)
    }
}

impl Default for Rock {
    fn default() -> Self {
        Self::new(GameConfig::INITIAL_ROCK_HEALTH)
    }
}

/// Currency and click strength of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub dust: u64,
    pub damage: u64,
}

impl Player {
    pub const fn new(dust: u64, damage: u64) -> Self {
        Self { dust, damage }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(0, GameConfig::BASE_DAMAGE)
    }
}
