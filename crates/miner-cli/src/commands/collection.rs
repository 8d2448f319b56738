//! Collection command - shape details for one collection.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use miner_analysis::snapshot::{CollectionDetail, SnapshotReporter};

use super::open_host;
use crate::{Config, OutputFormat};

/// Arguments for the collection command.
#[derive(Debug, Args)]
pub struct CollectionArgs {
    /// Capture file (JSON).
    pub capture: PathBuf,

    /// Collection name as listed in the snapshot, e.g. `Posts` or `Meteor.users`.
    pub name: String,
}

/// Execute the collection command.
pub fn execute(args: &CollectionArgs, config: &Config) -> Result<()> {
    let Some(host) = open_host(&args.capture)? else {
        return Ok(());
    };
    let snapshot = SnapshotReporter::new(&config.miner).take_snapshot(&host);
    let Some(collection) = snapshot.collection(&args.name) else {
        bail!("no collection named '{}'", args.name);
    };
    let detail = CollectionDetail::from_snapshot(collection);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Text => print!("{}", detail.render()),
    }
    Ok(())
}
