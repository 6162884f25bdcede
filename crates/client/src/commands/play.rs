//! Headless scripted play session.

use anyhow::{Context, Result};
use clap::Parser;

use clicker_core::GameState;
use clicker_runtime::{GameSession, RuntimeConfig};

use crate::intent::Intent;

/// Run a sequence of commands against the game
///
/// Commands: click[:N] buy:<id> save load scenario:<name> tick:<secs>
/// bad-ending good-ending status
#[derive(Parser)]
pub struct Play {
    /// Rebuild the game from the event log before running the commands
    #[arg(short, long)]
    replay: bool,

    /// Seed for the flavor text picker
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Commands to run, in order
    #[arg(value_name = "COMMAND", required = true)]
    commands: Vec<Intent>,
}

impl Play {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        if self.replay && !config.persist_events {
            anyhow::bail!("--replay needs the event log, but CLICKER_PERSIST_EVENTS is off");
        }

        let mut builder = GameSession::builder().runtime_config(config);
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }

        let mut session = if self.replay {
            builder
                .build_from_history()
                .context("failed to replay event history")?
        } else {
            builder.build()
        };

        for intent in self.commands {
            if session.state().exit_requested() {
                tracing::info!("exit requested; skipping remaining commands");
                break;
            }
            run_intent(&mut session, intent)?;
        }

        print_status(session.state());
        Ok(())
    }
}

fn run_intent(session: &mut GameSession, intent: Intent) -> Result<()> {
    match intent {
        Intent::Click(times) => {
            for _ in 0..times {
                session.click()?;
            }
        }
        Intent::Buy(id) => match session.purchase_upgrade(&id) {
            Ok(()) => println!("bought {id} (level {})", session.state().upgrade_level(&id)),
            Err(err) if err.is_rule_violation() => println!("cannot buy {id}: {err}"),
            Err(err) => return Err(err.into()),
        },
        Intent::Save => {
            session.save()?;
            println!("saved");
        }
        Intent::Load => {
            session.load()?;
            println!("loaded");
        }
        Intent::Scenario(scenario) => session.apply_scenario(scenario),
        Intent::Tick(dt) => {
            let clicks = session.tick(dt)?;
            if clicks > 0 {
                println!("auto-clicker struck {clicks} time(s)");
            }
        }
        Intent::BadEnding => {
            session.take_bad_ending();
            println!("{}", session.state().current_message());
        }
        Intent::GoodEnding => {
            session.take_good_ending()?;
            println!("{}", session.state().current_message());
        }
        Intent::Status => print_status(session.state()),
    }
    Ok(())
}

fn print_status(state: &GameState) {
    let rock = state.rock();
    let player = state.player();

    println!(
        "rock {} ({:.4}%)  dust {}  damage {}",
        rock.health,
        rock.health_fraction() * 100.0,
        player.dust,
        player.damage
    );

    for upgrade in state.upgrades().sorted_upgrades() {
        let level = state.upgrade_level(upgrade.id);
        let next = match state.next_upgrade_cost(upgrade.id) {
            Ok(Some(cost)) => cost.to_string(),
            Ok(None) => "max".to_string(),
            Err(_) => "?".to_string(),
        };
        println!("  {:<24} {level}/{}  next {next}", upgrade.id, upgrade.max_level);
    }

    if state.auto_clicker_active() {
        println!("  auto-clicker: {} per second", state.auto_clicker_rate());
    }
    if state.end_game_choice_pending() {
        println!("  the heart awaits: bad-ending or good-ending");
    }
    if state.game_over() {
        println!("  game over");
    }
    if state.game_won() {
        println!("  game won");
    }
    if !state.current_message().is_empty() {
        println!("  \"{}\"", state.current_message());
    }
}
