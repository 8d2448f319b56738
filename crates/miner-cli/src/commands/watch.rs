//! Watch command - re-read a capture on an interval and print changes.
//!
//! The capture file may be rewritten between scans by whatever exports page
//! state. A scan whose capture cannot be read is skipped and retried on the
//! next tick.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use crossbeam_channel::unbounded;
use miner_analysis::driver::Poller;
use miner_analysis::host::CapturedHost;
use miner_analysis::snapshot::{FullSnapshot, RenderState, SnapshotReporter};
use miner_core::HostRegistries;

use super::open_host;
use crate::{render, Config, OutputFormat};

/// Arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Capture file (JSON).
    pub capture: PathBuf,

    /// Milliseconds between scans. Overrides `poll.interval_ms`.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many scans. Runs until interrupted when unset.
    #[arg(long)]
    pub scans: Option<u64>,
}

/// Execute the watch command.
pub fn execute(args: &WatchArgs, config: &Config) -> Result<()> {
    // Probe once up front; an absent host means the poller never starts.
    if open_host(&args.capture)?.is_none() {
        return Ok(());
    }

    let interval = match args.interval_ms {
        Some(0) => anyhow::bail!("--interval-ms must be positive"),
        Some(ms) => Duration::from_millis(ms),
        None => config.miner.poll.effective_interval(),
    };

    let reporter = SnapshotReporter::new(&config.miner);
    let path = args.capture.clone();
    let scan = move || match CapturedHost::load(&path) {
        Ok(host) if host.probe().is_ok() => Some(reporter.take_snapshot(&host)),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "capture unreadable, skipping scan");
            None
        }
    };

    let (tx, rx) = unbounded();
    let poller = Poller::spawn(interval, scan, move |snapshot: FullSnapshot| {
        let _ = tx.send(snapshot);
    })?;

    let mut state = RenderState::new();
    let mut seen = 0u64;
    for snapshot in rx.iter() {
        let diff = state.apply(snapshot);
        seen += 1;
        match config.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&diff)?),
            OutputFormat::Text => {
                if !diff.is_empty() {
                    print!("{}", render::diff(&diff));
                }
            }
        }
        if args.scans.is_some_and(|limit| seen >= limit) {
            break;
        }
    }

    let stats = poller.stop()?;
    tracing::debug!(scans = stats.scans, skipped = stats.skipped, "watch finished");
    Ok(())
}
