//! Snapshot command - one scan of a capture.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use miner_analysis::snapshot::SnapshotReporter;

use super::{open_host, use_color};
use crate::{render, Config, OutputFormat};

/// Arguments for the snapshot command.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Capture file (JSON).
    pub capture: PathBuf,
}

/// Execute the snapshot command.
pub fn execute(args: &SnapshotArgs, config: &Config) -> Result<()> {
    let Some(host) = open_host(&args.capture)? else {
        return Ok(());
    };
    let snapshot = SnapshotReporter::new(&config.miner).take_snapshot(&host);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => print!("{}", render::panel(&snapshot, config.show_all, use_color())),
    }
    Ok(())
}
