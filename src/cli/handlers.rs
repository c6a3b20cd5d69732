// src/cli/handlers.rs
use crate::catalogue::Catalogue;
use crate::cli::args::Cli;
use crate::config::Config;
use crate::error::{ConfigError, DashError};
use crate::exit::StreamDashExit;
use crate::present::{self, LabelRule};
use crate::reporting::{self, OutputFormat};
use crate::view::{View, ViewSelection};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Loads the config file named on the command line and applies flag overrides.
///
/// # Errors
/// Returns error if the file is malformed or the result fails validation.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_from(&cli.config).map_err(DashError::from)?;
    if let Some(source) = &cli.source {
        config.source.location.clone_from(source);
    }
    if let Some(top) = cli.top {
        config.ranking.top_n = top;
    }
    config.validate().map_err(DashError::from)?;
    Ok(config)
}

/// Writes the default config to `path` unless one is already there.
///
/// # Errors
/// Returns error if the file exists or cannot be written.
pub fn handle_init(path: &Path) -> Result<StreamDashExit> {
    if path.exists() {
        let err = ConfigError::Invalid(format!("{} already exists", path.display()));
        return Err(DashError::from(err).into());
    }
    Config::default().save(path).map_err(DashError::from)?;
    println!("{} {}", "Created".green().bold(), path.display());
    Ok(StreamDashExit::Success)
}

/// Loads the catalogue named by `config`, logging what was skipped.
///
/// # Errors
/// Returns error if the source cannot be fetched or parsed.
pub fn load_catalogue(config: &Config) -> Result<Catalogue> {
    let catalogue = Catalogue::load(&config.source).map_err(DashError::from)?;
    let skipped = catalogue.dataset().issues().len();
    if skipped > 0 {
        eprintln!(
            "{}",
            format!("warning: skipped {skipped} malformed row(s)").yellow()
        );
    }
    Ok(catalogue)
}

/// Handles the genres command.
///
/// # Errors
/// Returns error if output serialization fails.
pub fn handle_genres(catalogue: &Catalogue, format: OutputFormat) -> Result<StreamDashExit> {
    reporting::print_genres(catalogue.genres(), format)?;
    Ok(StreamDashExit::Success)
}

/// Resolves `selection` and prints the resulting view.
///
/// # Errors
/// Returns error if the selection names an unknown genre or output fails.
pub fn handle_view(
    catalogue: &Catalogue,
    config: &Config,
    selection: &ViewSelection,
    format: OutputFormat,
) -> Result<StreamDashExit> {
    let selector = catalogue.selector(&config.ranking);
    let view = selector.select(selection).map_err(DashError::from)?;

    match view {
        View::Ranked { heading, subset } => {
            let rule = LabelRule::from(&config.display);
            let presentation = present::adapt(&heading, &subset, rule);
            reporting::print_presentation(&config.display.title, &presentation, format)?;
        }
        View::Statistics(columns) => {
            reporting::print_statistics(&config.display.title, &columns, format)?;
        }
    }
    Ok(StreamDashExit::Success)
}
