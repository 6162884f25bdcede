//! List the upgrade catalog.

use anyhow::Result;
use clap::Parser;

use clicker_core::{CostCurve, UpgradeRegistry};

/// List every upgrade with its price curve
#[derive(Parser)]
pub struct Upgrades {
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

impl Upgrades {
    pub fn execute(self) -> Result<()> {
        let registry = UpgradeRegistry::new();
        let upgrades = registry.sorted_upgrades();

        if self.json {
            let list: Vec<_> = upgrades
                .iter()
                .map(|upgrade| {
                    serde_json::json!({
                        "id": upgrade.id,
                        "name": upgrade.name,
                        "description": upgrade.description,
                        "max_level": upgrade.max_level,
                        "first_cost": upgrade.cost_at(0),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        for upgrade in upgrades {
            let cost = match upgrade.cost {
                CostCurve::Linear { step } => format!("{step} x (level + 1)"),
                CostCurve::Flat(price) => price.to_string(),
            };
            println!(
                "{:<24} {:<28} max {:<2} cost {}",
                upgrade.id, upgrade.name, upgrade.max_level, cost
            );
            println!("    {}", upgrade.description);
        }
        Ok(())
    }
}
