// src/logging.rs
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Overrides `[logging] level` when set.
pub const LOG_ENV: &str = "STREAMDASH_LOG";

/// Installs the global tracing subscriber.
///
/// CLI commands log to stderr. While the TUI owns the terminal, events go to
/// the configured log file, or are dropped when there is none.
///
/// # Errors
/// Returns error if the filter is invalid, the log file cannot be opened, or
/// a subscriber is already installed.
pub fn init(config: &LoggingConfig, interactive: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level `{}`", config.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if !interactive {
        builder.with_writer(std::io::stderr).try_init().map_err(anyhow::Error::msg)?;
        return Ok(());
    }

    let Some(path) = config.file.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {path}"))?;
    builder
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(anyhow::Error::msg)?;
    Ok(())
}
