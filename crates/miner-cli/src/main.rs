//! The `meteor-miner` binary.

use anyhow::Result;
use clap::Parser;

use miner_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    miner_core::tracing::init(&config.miner.logging);

    match cli.command {
        Commands::Snapshot(args) => miner_cli::commands::snapshot::execute(&args, &config),
        Commands::Watch(args) => miner_cli::commands::watch::execute(&args, &config),
        Commands::Collection(args) => miner_cli::commands::collection::execute(&args, &config),
        Commands::Template(args) => miner_cli::commands::template::execute(&args, &config),
    }
}
