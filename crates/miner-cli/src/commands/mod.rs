//! Subcommand implementations.

pub mod collection;
pub mod snapshot;
pub mod template;
pub mod watch;

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use miner_analysis::host::CapturedHost;
use miner_core::HostRegistries;

/// Load a capture and probe it. An absent host yields `None`: the tool
/// does nothing rather than report a degraded picture.
pub(crate) fn open_host(path: &Path) -> Result<Option<CapturedHost>> {
    let host = CapturedHost::load(path)
        .with_context(|| format!("loading capture {}", path.display()))?;
    match host.probe() {
        Ok(()) => Ok(Some(host)),
        Err(e) => {
            tracing::info!(error = %e, "no host in capture, nothing to do");
            Ok(None)
        }
    }
}

pub(crate) fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
