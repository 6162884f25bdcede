/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Display duration (in time units) of the flavor line shown after a click.
    pub message_duration: f64,
}

impl GameConfig {
    // ===== fixed rules =====
    /// Health of a brand new rock.
    pub const INITIAL_ROCK_HEALTH: u64 = 10_000_000;
    /// Click damage before any upgrade is bought.
    pub const BASE_DAMAGE: u64 = 1;
    /// Dust credited to the player for every click.
    pub const DUST_PER_CLICK: u64 = 1;
    /// Message timer value meaning "show until replaced".
    pub const INDEFINITE_MESSAGE: f64 = -1.0;
    /// Upper bound on auto clicks performed by a single tick.
    pub const MAX_AUTO_CLICKS_PER_TICK: u32 = 10_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MESSAGE_DURATION: f64 = 3.0;

    pub fn new() -> Self {
        Self {
            message_duration: Self::DEFAULT_MESSAGE_DURATION,
        }
    }

    pub fn with_message_duration(message_duration: f64) -> Self {
        Self { message_duration }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
