//! # miner-cli
//!
//! Command-line front-end over captured page state.
//!
//! ## Commands
//!
//! - `meteor-miner snapshot` - One scan, printed as the summary panel
//! - `meteor-miner watch` - Re-scan a capture on an interval and print changes
//! - `meteor-miner collection` - Shape details for one collection
//! - `meteor-miner template` - Helpers and event map for one template
//!
//! ## Configuration
//!
//! - `MINER_CONFIG` - Path to a TOML config file
//! - `MINER_LOG` - Tracing filter directive

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(clippy::print_stdout)]

pub mod commands;
pub mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use miner_core::MinerConfig;

/// Meteor Miner - inspect collections, templates and subscriptions of a Meteor page.
#[derive(Debug, Parser)]
#[command(name = "meteor-miner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file.
    #[arg(long, env = "MINER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Show collections and templates that have nothing loaded.
    #[arg(long)]
    pub all: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the effective configuration.
    pub fn config(&self) -> Result<Config> {
        let miner = match &self.config {
            Some(path) => MinerConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => MinerConfig::default(),
        };
        Ok(Config {
            miner,
            format: self.format.clone(),
            show_all: self.all,
        })
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Take one snapshot of a capture.
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Poll a capture file and print what changes.
    Watch(commands::watch::WatchArgs),
    /// Show the shapes of one collection.
    Collection(commands::collection::CollectionArgs),
    /// Show helpers and events of one template.
    Template(commands::template::TemplateArgs),
}

/// Output format.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Effective CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub miner: MinerConfig,
    pub format: OutputFormat,
    /// Include entries that are not loaded.
    pub show_all: bool,
}
