//! State handlers for each event kind.
//!
//! The same set serves live play and replay. Every handler writes the
//! absolute values the event carries, so running it after the live mutation
//! already happened changes nothing.

use clicker_core::{Event, EventKind, GameError, GameState};

use crate::events::EventDispatcher;

/// Registers the gameplay handlers on `dispatcher`.
pub fn register_default_handlers(dispatcher: &mut EventDispatcher<GameState>) {
    dispatcher.register(EventKind::Click, on_click);
    dispatcher.register(EventKind::UpgradePurchased, on_upgrade_purchased);
    dispatcher.register(EventKind::DamageUpgraded, on_damage_upgraded);
}

fn on_click(state: &mut GameState, event: &Event) -> Result<(), GameError> {
    if let Event::Click(click) = event {
        state.apply_click(click);
    }
    Ok(())
}

/// Uses the reconstruct effect; the forward effect is level-relative and
/// would double-apply.
fn on_upgrade_purchased(state: &mut GameState, event: &Event) -> Result<(), GameError> {
    match event {
        Event::UpgradePurchased(purchase) => state.apply_upgrade_purchased(purchase),
        _ => Ok(()),
    }
}

fn on_damage_upgraded(state: &mut GameState, event: &Event) -> Result<(), GameError> {
    if let Event::DamageUpgraded(upgrade) = event {
        state.apply_damage_upgraded(upgrade);
    }
    Ok(())
}
