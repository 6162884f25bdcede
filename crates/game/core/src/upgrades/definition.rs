use crate::config::GameConfig;
use crate::flavor;
use crate::state::GameState;

/// Price of the next level as a pure function of the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostCurve {
    /// `step * (level + 1)`.
    Linear { step: u64 },
    /// Same price regardless of level.
    Flat(u64),
}

impl CostCurve {
    pub fn cost(&self, current_level: u32) -> u64 {
        match *self {
            CostCurve::Linear { step } => step.saturating_mul(u64::from(current_level) + 1),
            CostCurve::Flat(price) => price,
        }
    }
}

/// What an upgrade does to the game state.
///
/// Every effect has two interpretations:
/// - [`apply`](Self::apply) runs once per live purchase and may be relative
///   to the current state.
/// - [`reconstruct`](Self::reconstruct) derives the absolute result from the
///   target level alone. It is idempotent and is what replay uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpgradeEffect {
    /// +1 click damage per level.
    DamageBoost,
    /// Turns the auto-clicker on at the given rate (clicks per second).
    AutoClicker { rate: u32 },
    /// Halts the rock and asks the player to choose an ending.
    FinalChoice,
}

impl UpgradeEffect {
    pub fn apply(self, state: &mut GameState) {
        match self {
            UpgradeEffect::DamageBoost => {
                state.player.damage = state.player.damage.saturating_add(1);
            }
            UpgradeEffect::AutoClicker { rate } => state.enable_auto_clicker(rate),
            UpgradeEffect::FinalChoice => Self::open_final_choice(state),
        }
    }

    pub fn reconstruct(self, state: &mut GameState, level: u32) {
        match self {
            // Assumes nothing but this upgrade ever raises damage above base.
            UpgradeEffect::DamageBoost => {
                state.player.damage = GameConfig::BASE_DAMAGE + u64::from(level);
            }
            UpgradeEffect::AutoClicker { rate } => {
                if level > 0 {
                    state.enable_auto_clicker(rate);
                }
            }
            UpgradeEffect::FinalChoice => {
                if level > 0 {
                    Self::open_final_choice(state);
                }
            }
        }
    }

    fn open_final_choice(state: &mut GameState) {
        state.end_game_choice_pending = true;
        state.show_message(flavor::HEART_MESSAGE, GameConfig::INDEFINITE_MESSAGE);
    }
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub max_level: u32,
    pub cost: CostCurve,
    pub effect: UpgradeEffect,
}

impl UpgradeDefinition {
    /// Price of the level after `current_level`.
    pub fn cost_at(&self, current_level: u32) -> u64 {
        self.cost.cost(current_level)
    }

    pub fn is_maxed(&self, current_level: u32) -> bool {
        current_level >= self.max_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_cost_grows_with_level() {
        let curve = CostCurve::Linear { step: 10 };
        assert_eq!(curve.cost(0), 10);
        assert_eq!(curve.cost(1), 20);
        assert_eq!(curve.cost(4), 50);
    }

    #[test]
    fn flat_cost_ignores_level() {
        let curve = CostCurve::Flat(500);
        assert_eq!(curve.cost(0), 500);
        assert_eq!(curve.cost(7), 500);
    }

    #[test]
    fn damage_reconstruct_is_absolute_and_idempotent() {
        let mut state = GameState::new();
        state.player.damage = 42;

        UpgradeEffect::DamageBoost.reconstruct(&mut state, 3);
        assert_eq!(state.player.damage, 4);

        UpgradeEffect::DamageBoost.reconstruct(&mut state, 3);
        assert_eq!(state.player.damage, 4);
    }

    #[test]
    fn damage_apply_is_relative() {
        let mut state = GameState::new();
        UpgradeEffect::DamageBoost.apply(&mut state);
        UpgradeEffect::DamageBoost.apply(&mut state);
        assert_eq!(state.player.damage, 3);
    }

    #[test]
    fn single_level_reconstruct_at_zero_is_noop() {
        let mut state = GameState::new();

        UpgradeEffect::AutoClicker { rate: 5 }.reconstruct(&mut state, 0);
        UpgradeEffect::FinalChoice.reconstruct(&mut state, 0);

        assert!(!state.auto_clicker_active());
        assert!(!state.end_game_choice_pending());
        assert!(state.current_message().is_empty());
    }

    #[test]
    fn final_choice_shows_indefinite_message() {
        let mut state = GameState::new();
        UpgradeEffect::FinalChoice.apply(&mut state);

        assert!(state.end_game_choice_pending());
        assert_eq!(state.current_message(), flavor::HEART_MESSAGE);
        assert_eq!(state.message_timer(), GameConfig::INDEFINITE_MESSAGE);
    }
}
