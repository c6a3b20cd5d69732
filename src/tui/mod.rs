// src/tui/mod.rs
pub mod dashboard;
pub mod runner;

use crate::catalogue::Catalogue;
use crate::config::Config;
use anyhow::Result;

/// Runs the TUI dashboard (the main entry point).
///
/// # Errors
/// Returns error if TUI execution fails or IO error occurs.
pub fn run(catalogue: &Catalogue, config: &Config) -> Result<()> {
    dashboard::run(catalogue, config)
}
