use std::io::BufRead;
use std::process::Command;

use anyhow::Result;
use clap::Parser;
use parcel_core::DEFAULT_UNKNOWN;
use parcel_core::LoadedRegistry;
use parcel_core::Resolution;
use parcel_core::Resolver;
use parcel_core::TracingObserver;
use serde_json::json;

#[derive(Debug, Parser)]
pub struct ResolveCli {
    /// Scanned codes to resolve. When omitted, codes are read line-by-line
    /// from stdin until EOF, one resolution per line.
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Owner reported when no registered code matches.
    #[arg(long = "unknown", value_name = "NAME", default_value = DEFAULT_UNKNOWN)]
    pub unknown: String,

    /// Emit one JSON object per resolution instead of `RAW -> OWNER` lines.
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Run this command with the resolved owner as its argument after each
    /// resolution (e.g. a text-to-speech wrapper).
    #[arg(long = "announce-with", value_name = "CMD")]
    pub announce_with: Option<String>,
}

pub fn run(cli: ResolveCli, loaded: LoadedRegistry) -> Result<()> {
    let resolver = Resolver::with_unknown(loaded.registry, cli.unknown.clone());
    let observer = TracingObserver;

    if cli.codes.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let raw = line?;
            if raw.trim().is_empty() {
                continue;
            }
            let resolution = resolver.resolve_observed(&raw, &observer);
            report(&cli, &raw, &resolution)?;
        }
        return Ok(());
    }

    for raw in &cli.codes {
        let resolution = resolver.resolve_observed(raw, &observer);
        report(&cli, raw, &resolution)?;
    }
    Ok(())
}

fn report(cli: &ResolveCli, raw: &str, resolution: &Resolution) -> Result<()> {
    if cli.json {
        let payload = json!({
            "raw": raw,
            "owner": resolution.owner,
            "outcome": resolution.outcome,
        });
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{raw} -> {}", resolution.owner);
    }
    if let Some(command) = &cli.announce_with {
        announce(command, &resolution.owner);
    }
    Ok(())
}

/// Announcement failures are reported but never fail the resolution run.
fn announce(command: &str, owner: &str) {
    match Command::new(command).arg(owner).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            tracing::warn!(command, %status, "announce command failed");
        }
        Err(err) => {
            tracing::warn!(command, error = %err, "announce command could not be started");
        }
    }
}
