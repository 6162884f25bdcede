//! Authoritative game state representation.
//!
//! [`GameState`] is the whole serializable aggregate: rock, player, upgrade
//! levels and the transient UI-facing fields. Collaborators read it freely
//! but mutate it only through event application, scenario presets and the
//! explicit endings.
mod entities;

pub use entities::{Player, Rock};

use crate::config::GameConfig;
use crate::error::{ErrorKind, GameError, Result};
use crate::events::{ClickEvent, DamageUpgradedEvent, Event, UpgradePurchasedEvent};
use crate::flavor;
use crate::upgrades::{UpgradeEffect, UpgradeRegistry};

/// Canonical snapshot of the game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub(crate) rock: Rock,
    pub(crate) player: Player,
    pub(crate) upgrades: UpgradeRegistry,

    /// Flavor line currently displayed over the rock.
    pub(crate) current_message: String,
    /// Remaining display time; negative means "until replaced".
    pub(crate) message_timer: f64,

    pub(crate) auto_clicker_active: bool,
    /// Auto clicks per time unit.
    pub(crate) auto_clicker_rate: u32,

    pub(crate) end_game_choice_pending: bool,
    pub(crate) game_over: bool,
    pub(crate) game_won: bool,

    /// Set by the endings; asks the host loop to shut down.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) exit_requested: bool,
}

impl GameState {
    /// Fresh game: full rock, no dust, base damage, catalog registered.
    pub fn new() -> Self {
        Self {
            rock: Rock::default(),
            player: Player::default(),
            upgrades: UpgradeRegistry::new(),
            current_message: String::new(),
            message_timer: 0.0,
            auto_clicker_active: false,
            auto_clicker_rate: 0,
            end_game_choice_pending: false,
            game_over: false,
            game_won: false,
            exit_requested: false,
        }
    }

    // ===== read surface =====

    pub fn rock(&self) -> &Rock {
        &self.rock
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn upgrades(&self) -> &UpgradeRegistry {
        &self.upgrades
    }

    pub fn upgrade_level(&self, id: &str) -> u32 {
        self.upgrades.player_level(id)
    }

    pub fn next_upgrade_cost(&self, id: &str) -> Result<Option<u64>> {
        self.upgrades.next_cost(id)
    }

    pub fn current_message(&self) -> &str {
        &self.current_message
    }

    pub fn message_timer(&self) -> f64 {
        self.message_timer
    }

    pub fn auto_clicker_active(&self) -> bool {
        self.auto_clicker_active
    }

    pub fn auto_clicker_rate(&self) -> u32 {
        self.auto_clicker_rate
    }

    pub fn end_game_choice_pending(&self) -> bool {
        self.end_game_choice_pending
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn game_won(&self) -> bool {
        self.game_won
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    // ===== click =====

    /// Builds the event for one click without touching the state.
    pub fn click_event(&self) -> ClickEvent {
        let damage = self.player.damage;
        let dust_gained = GameConfig::DUST_PER_CLICK;
        ClickEvent {
            damage_dealt: damage,
            dust_gained,
            rock_health_before: self.rock.health,
            rock_health_after: self.rock.health.saturating_sub(damage),
            player_dust_before: self.player.dust,
            player_dust_after: self.player.dust.saturating_add(dust_gained),
        }
    }

    /// Writes the carried "after" values.
    pub fn apply_click(&mut self, event: &ClickEvent) {
        self.rock.health = event.rock_health_after;
        self.player.dust = event.player_dust_after;
    }

    // ===== purchase =====

    /// Validates a purchase and returns the effect and price to charge.
    ///
    /// Order matters: unknown id, then max level, then funds.
    pub fn check_purchase(&self, id: &str) -> Result<(UpgradeEffect, u64)> {
        let definition = self.upgrades.get_upgrade(id)?;
        let level = self.upgrades.player_level(id);

        if definition.is_maxed(level) {
            return Err(GameError::new(ErrorKind::UpgradeMaxLevel));
        }

        let cost = definition.cost_at(level);
        if self.player.dust < cost {
            return Err(GameError::new(ErrorKind::InsufficientDust));
        }

        Ok((definition.effect, cost))
    }

    /// Buys the next level of `id` and returns the event describing it.
    ///
    /// On error nothing has changed. On success the dust is spent, the level
    /// raised and the forward effect applied; the caller must dispatch the
    /// returned event.
    pub fn purchase_upgrade(&mut self, id: &str) -> Result<UpgradePurchasedEvent> {
        let (effect, cost) = self.check_purchase(id)?;

        let old_dust = self.player.dust;
        self.player.dust = old_dust - cost;
        let new_level = self.upgrades.levels_mut().increment(id);
        effect.apply(self);

        Ok(UpgradePurchasedEvent {
            upgrade_id: id.to_string(),
            new_level,
            old_dust,
            new_dust: self.player.dust,
        })
    }

    /// Brings the state in line with a recorded purchase.
    ///
    /// Uses the reconstruct effect, so applying the same event twice (or
    /// after the live purchase already ran) changes nothing.
    pub fn apply_upgrade_purchased(&mut self, event: &UpgradePurchasedEvent) -> Result<()> {
        let definition = self.upgrades.get_upgrade(&event.upgrade_id).map_err(|_| {
            GameError::with_message(
                ErrorKind::UpgradeNotFound,
                format!("Upgrade not found: {}", event.upgrade_id),
            )
        })?;

        if event.new_level > definition.max_level {
            return Err(GameError::with_message(
                ErrorKind::UpgradeMaxLevel,
                format!(
                    "Recorded level {} of {} exceeds max level {}",
                    event.new_level, event.upgrade_id, definition.max_level
                ),
            ));
        }

        let effect = definition.effect;
        self.upgrades
            .levels_mut()
            .set(event.upgrade_id.as_str(), event.new_level);
        self.player.dust = event.new_dust;
        effect.reconstruct(self, event.new_level);
        Ok(())
    }

    pub fn apply_damage_upgraded(&mut self, event: &DamageUpgradedEvent) {
        self.player.damage = event.new_damage;
        self.player.dust = event.new_dust;
    }

    /// Applies any event with replay semantics.
    pub fn apply_event(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Click(click) => self.apply_click(click),
            Event::UpgradePurchased(purchase) => self.apply_upgrade_purchased(purchase)?,
            Event::DamageUpgraded(upgrade) => self.apply_damage_upgraded(upgrade),
        }
        Ok(())
    }

    /// Re-initializes the upgrade catalog, e.g. after deserializing.
    pub fn register_catalog(&mut self) {
        self.upgrades.register_catalog();
    }

    // ===== flavor text =====

    pub fn show_message(&mut self, text: impl Into<String>, duration: f64) {
        self.current_message = text.into();
        self.message_timer = duration;
    }

    pub fn clear_message(&mut self) {
        self.current_message.clear();
        self.message_timer = 0.0;
    }

    /// Counts the message timer down by `dt`; indefinite messages stay.
    ///
    /// Non-finite or negative `dt` is ignored.
    pub fn advance_message_timer(&mut self, dt: f64) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        if self.message_timer > 0.0 {
            self.message_timer -= dt;
            if self.message_timer <= 0.0 {
                self.clear_message();
            }
        }
    }

    // ===== endings =====

    /// "Take the heart": the rock is destroyed and the game is lost.
    pub fn take_bad_ending(&mut self) {
        self.rock.health = 0;
        self.game_over = true;
        self.end_game_choice_pending = false;
        self.auto_clicker_active = false;
        self.show_message(flavor::BAD_ENDING_MESSAGE, GameConfig::INDEFINITE_MESSAGE);
        self.exit_requested = true;
    }

    /// "Let it rest": the rock survives and the game is won.
    pub fn take_good_ending(&mut self) {
        self.game_won = true;
        self.end_game_choice_pending = false;
        self.auto_clicker_active = false;
        self.show_message(flavor::GOOD_ENDING_MESSAGE, GameConfig::INDEFINITE_MESSAGE);
        self.exit_requested = true;
    }

    pub(crate) fn enable_auto_clicker(&mut self, rate: u32) {
        self.auto_clicker_active = true;
        self.auto_clicker_rate = rate;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
