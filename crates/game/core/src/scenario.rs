//! Deterministic state presets for tests and debug tooling.
//!
//! A preset overwrites the rock, the player, every upgrade level and every
//! flag, so nothing leaks from whatever state was active before. Presets are
//! not events: a game seeded this way cannot be rebuilt from its event log.

use crate::config::GameConfig;
use crate::state::{GameState, Player, Rock};
use crate::upgrades::{AUTO_CLICKER_V0_1, AUTO_CLICKER_V1_0, STRONGER_PICKAXE};

/// Named starting points.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Scenario {
    /// Identical to a new game.
    Early,
    /// Half the rock gone, most of the pickaxe bought, basic auto-clicker.
    Mid,
    /// Rich enough to buy the heart of the mountain.
    EndGameReady,
}

impl GameState {
    /// Snaps the state into the given preset.
    pub fn apply_scenario(&mut self, scenario: Scenario) {
        self.reset_for_scenario();

        match scenario {
            Scenario::Early => {}
            Scenario::Mid => {
                self.rock = Rock::new(GameConfig::INITIAL_ROCK_HEALTH / 2);
                self.player = Player::new(500, 5);
                let levels = self.upgrades.levels_mut();
                levels.set(STRONGER_PICKAXE, 4);
                levels.set(AUTO_CLICKER_V0_1, 1);
                self.enable_auto_clicker(1);
            }
            Scenario::EndGameReady => {
                self.rock = Rock::new(GameConfig::INITIAL_ROCK_HEALTH / 10);
                self.player = Player::new(100_000, 10);
                let levels = self.upgrades.levels_mut();
                levels.set(STRONGER_PICKAXE, 5);
                levels.set(AUTO_CLICKER_V0_1, 1);
                levels.set(AUTO_CLICKER_V1_0, 1);
                self.enable_auto_clicker(5);
            }
        }
    }

    fn reset_for_scenario(&mut self) {
        self.rock = Rock::default();
        self.player = Player::default();
        self.upgrades.levels_mut().clear();
        self.upgrades.register_catalog();
        self.clear_message();
        self.auto_clicker_active = false;
        self.auto_clicker_rate = 0;
        self.end_game_choice_pending = false;
        self.game_over = false;
        self.game_won = false;
        self.exit_requested = false;
    }
}
