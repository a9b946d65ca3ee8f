//! Sett CLI - Verify vault actions from snapshot files.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_diff, run_fees, run_verify};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Verify(args) => run_verify(&args, cli.format)?,
        Commands::Diff(args) => run_diff(&args, cli.format)?,
        Commands::Fees(args) => run_fees(&args, cli.format)?,
    }

    Ok(())
}
