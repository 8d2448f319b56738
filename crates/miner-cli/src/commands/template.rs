//! Template command - helpers and event map for one template.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use miner_analysis::snapshot::SnapshotReporter;

use super::open_host;
use crate::{Config, OutputFormat};

/// Arguments for the template command.
#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Capture file (JSON).
    pub capture: PathBuf,

    /// Template name without the `Template.` prefix.
    pub name: String,
}

/// Execute the template command.
pub fn execute(args: &TemplateArgs, config: &Config) -> Result<()> {
    let Some(host) = open_host(&args.capture)? else {
        return Ok(());
    };
    let detail = SnapshotReporter::new(&config.miner)
        .template_detail(&host, &args.name)?
        .with_context(|| format!("no template named '{}'", args.name))?;

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Text => print!("{}", detail.render()),
    }
    Ok(())
}
