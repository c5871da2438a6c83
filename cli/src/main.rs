use anyhow::Result;
use clap::Parser;
use parcel_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);
    parcel_cli::run(cli)
}

fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
