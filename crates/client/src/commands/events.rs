//! Dump the persisted event log.

use anyhow::{Context, Result};
use clap::Parser;

use clicker_runtime::{EventRecord, EventStore, FileEventStore, RuntimeConfig};

/// Print every recorded event, one JSON record per line
#[derive(Parser)]
pub struct Events {
    /// Show only the number of events per kind
    #[arg(short, long)]
    summary: bool,
}

impl Events {
    pub fn execute(self, config: &RuntimeConfig) -> Result<()> {
        let path = config.event_log_path();
        let events = FileEventStore::new(&path)
            .load_events()
            .with_context(|| format!("failed to read {}", path.display()))?;

        if self.summary {
            let mut counts = std::collections::BTreeMap::<&'static str, usize>::new();
            for event in &events {
                *counts.entry(event.kind().into()).or_default() += 1;
            }
            for (kind, count) in counts {
                println!("{kind:<18} {count}");
            }
            println!("{:<18} {}", "total", events.len());
            return Ok(());
        }

        for event in &events {
            println!("{}", EventRecord::to_line(event)?);
        }
        Ok(())
    }
}
