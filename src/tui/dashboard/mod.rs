// src/tui/dashboard/mod.rs
pub mod input;
pub mod state;
pub mod ui;

use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::tui::runner;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use state::DashboardApp;
use std::io;
use std::time::Duration;

/// Runs the TUI dashboard.
///
/// # Errors
/// Returns error if terminal setup fails or during execution. The terminal
/// is restored on every path.
pub fn run(catalogue: &Catalogue, config: &Config) -> Result<()> {
    runner::guarded(
        runner::setup_terminal,
        || {
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            run_app(&mut terminal, catalogue, config)
        },
        runner::restore_terminal,
    )
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalogue: &Catalogue,
    config: &Config,
) -> Result<()> {
    let mut app = DashboardApp::new(catalogue, config);
    tracing::info!("dashboard started");

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_input(key.code, key.modifiers, &mut app);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
