//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers::{handle_genres, handle_init, handle_view, load_catalogue, resolve_config};
use crate::config::Config;
use crate::exit::StreamDashExit;
use crate::logging;
use crate::reporting::OutputFormat;
use crate::view::{Statistic, ViewSelection};
use anyhow::Result;

/// Executes the parsed command line.
///
/// # Errors
/// Returns error if config, loading, selection or output fails.
pub fn execute(cli: &Cli) -> Result<StreamDashExit> {
    if cli.init {
        return handle_init(&cli.config);
    }

    let config = resolve_config(cli)?;
    let interactive = wants_dashboard(cli);
    logging::init(&config.logging, interactive)?;
    tracing::debug!(source = %config.source.location, "configuration resolved");

    if interactive {
        return run_dashboard(&config);
    }

    let catalogue = load_catalogue(&config)?;
    match &cli.command {
        Some(Commands::Genres { format }) => handle_genres(&catalogue, *format),
        Some(Commands::Genre { genre, format }) => {
            let selection = ViewSelection::GenreDistribution {
                genre: genre.clone(),
            };
            handle_view(&catalogue, &config, &selection, *format)
        }
        Some(Commands::Streamed { popular, format }) => {
            let stat = if *popular {
                Statistic::TopPopular
            } else {
                Statistic::TopStreamed
            };
            handle_view(&catalogue, &config, &ViewSelection::MostStreamed(stat), *format)
        }
        Some(Commands::Stats { format }) => {
            handle_view(&catalogue, &config, &ViewSelection::DescriptiveStatistics, *format)
        }
        Some(Commands::Dashboard) | None => handle_view(
            &catalogue,
            &config,
            &ViewSelection::MostStreamed(Statistic::TopStreamed),
            OutputFormat::Text,
        ),
    }
}

fn wants_dashboard(cli: &Cli) -> bool {
    matches!(cli.command, Some(Commands::Dashboard)) || (cli.command.is_none() && cli.ui)
}

#[cfg(feature = "tui")]
fn run_dashboard(config: &Config) -> Result<StreamDashExit> {
    // Load before taking over the terminal so load errors print normally.
    let catalogue = load_catalogue(config)?;
    crate::tui::run(&catalogue, config)?;
    Ok(StreamDashExit::Success)
}

#[cfg(not(feature = "tui"))]
fn run_dashboard(_config: &Config) -> Result<StreamDashExit> {
    Err(anyhow::anyhow!(
        "this build has no interactive dashboard (enable the `tui` feature)"
    ))
}
