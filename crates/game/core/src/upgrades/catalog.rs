//! Built-in upgrade catalog.

use super::{CostCurve, UpgradeDefinition, UpgradeEffect};

pub const STRONGER_PICKAXE: &str = "stronger_pickaxe";
pub const AUTO_CLICKER_V0_1: &str = "auto_clicker_v0_1";
pub const AUTO_CLICKER_V1_0: &str = "auto_clicker_v1_0";
pub const HEART_OF_THE_MOUNTAIN: &str = "heart_of_the_mountain";

pub(super) fn builtin() -> [UpgradeDefinition; 4] {
    [
        // Tier 1
        UpgradeDefinition {
            id: STRONGER_PICKAXE,
            name: "Stronger Pickaxe",
            description: "Increases click damage by 1.",
            max_level: 5,
            cost: CostCurve::Linear { step: 10 },
            effect: UpgradeEffect::DamageBoost,
        },
        UpgradeDefinition {
            id: AUTO_CLICKER_V0_1,
            name: "Auto-Clicker v0.1",
            description: "Enables a basic auto-clicker. Can be toggled.",
            max_level: 1,
            cost: CostCurve::Flat(100),
            effect: UpgradeEffect::AutoClicker { rate: 1 },
        },
        UpgradeDefinition {
            id: AUTO_CLICKER_V1_0,
            name: "Auto-Clicker v1.0",
            description: "Upgrades the auto-clicker to be permanent and faster.",
            max_level: 1,
            cost: CostCurve::Flat(500),
            effect: UpgradeEffect::AutoClicker { rate: 5 },
        },
        // Terminal choice
        UpgradeDefinition {
            id: HEART_OF_THE_MOUNTAIN,
            name: "The Heart of the Mountain",
            description: "The ultimate choice. Purchase to decide the rock's fate.",
            max_level: 1,
            cost: CostCurve::Flat(100_000),
            effect: UpgradeEffect::FinalChoice,
        },
    ]
}
