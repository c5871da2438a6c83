//! Command-line driver around the parcel resolution engine.

mod list_cmd;
mod resolve_cmd;

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use parcel_core::LoadedRegistry;
use parcel_core::load_registry;

pub use list_cmd::ListCli;
pub use resolve_cmd::ResolveCli;

#[derive(Debug, Parser)]
#[command(
    name = "parcel",
    about = "Resolve scanned parcel barcodes to their owners.",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Print verbose log output.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Directory holding the per-owner registry source files.
    #[arg(
        long = "parcels-dir",
        value_name = "DIR",
        global = true,
        default_value = "parcels"
    )]
    pub parcels_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the loaded registry and its per-owner summary.
    List(ListCli),
    /// Resolve scanned codes given as arguments or read line-by-line from stdin.
    Resolve(ResolveCli),
}

pub fn run(cli: Cli) -> Result<()> {
    let loaded = load_registry(&cli.parcels_dir).with_context(|| {
        format!(
            "failed to load parcel registry from {}",
            cli.parcels_dir.display()
        )
    })?;

    match cli.command {
        Command::List(list_cli) => list_cmd::run(list_cli, &loaded),
        Command::Resolve(resolve_cli) => resolve_cmd::run(resolve_cli, loaded),
    }
}

/// Human-readable load summary printed by `list`.
fn summary_lines(loaded: &LoadedRegistry) -> Vec<String> {
    let mut lines = vec![format!("{} entries loaded", loaded.registry.len())];
    for (owner, count) in &loaded.stats {
        lines.push(format!("  {owner}: {count}"));
    }
    lines
}
