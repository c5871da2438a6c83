use anyhow::Result;
use clap::Parser;
use parcel_core::LoadedRegistry;
use serde_json::json;

use crate::summary_lines;

#[derive(Debug, Parser)]
pub struct ListCli {
    /// Emit the registry and per-owner counts as a single JSON object.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(cli: ListCli, loaded: &LoadedRegistry) -> Result<()> {
    if cli.json {
        let payload = json!({
            "entries": loaded.registry.entries(),
            "owners": loaded.stats,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for entry in loaded.registry.iter() {
        println!("{} -> {}", entry.code, entry.owner);
    }
    for line in summary_lines(loaded) {
        println!("{line}");
    }
    Ok(())
}
