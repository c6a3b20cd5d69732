use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "streamdash", version, about = "Streaming catalogue dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Open the interactive dashboard
    #[arg(long)]
    pub ui: bool,
    /// Write a default streamdash.toml and exit
    #[arg(long)]
    pub init: bool,
    /// CSV location (URL or path), overrides `[source] location`
    #[arg(long, global = true, value_name = "URL|PATH")]
    pub source: Option<String>,
    /// Config file to read
    #[arg(long, global = true, value_name = "FILE", default_value = "streamdash.toml")]
    pub config: PathBuf,
    /// Number of titles per ranking, overrides `[ranking] top_n`
    #[arg(long, global = true, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the genre index
    Genres {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Top titles for one genre
    Genre {
        #[arg(value_name = "GENRE")]
        genre: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Top titles across the whole catalogue
    Streamed {
        /// Rank by the popularity metric instead of votes
        #[arg(long, short)]
        popular: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Summary statistics of the numeric columns
    Stats {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Open the interactive dashboard
    Dashboard,
}
