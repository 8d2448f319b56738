//! # miner-analysis
//!
//! Reflective analysis over a live host application: field-shape inference,
//! collection profiling, template load state, snapshot reporting, and the
//! fixed-interval driver that re-runs it all.

#![allow(clippy::module_inception)]

pub mod driver;
pub mod host;
pub mod profile;
pub mod shape;
pub mod snapshot;
pub mod templates;
