// src/bin/streamdash.rs
use clap::Parser;
use colored::Colorize;

use streamdash_core::cli::dispatch;
use streamdash_core::cli::Cli;
use streamdash_core::exit::StreamDashExit;

fn main() {
    let cli = Cli::parse();
    match dispatch::execute(&cli) {
        Ok(code) => code.exit(),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            StreamDashExit::for_error(&e).exit();
        }
    }
}
