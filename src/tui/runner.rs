// src/tui/runner.rs
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;

/// Switches the terminal into raw mode on the alternate screen.
///
/// # Errors
/// Returns error if the terminal rejects either mode change.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Undoes [`setup_terminal`].
///
/// # Errors
/// Returns error if the terminal rejects either mode change.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// Runs `body` between `setup` and `restore`. `restore` runs whenever `setup`
/// was attempted, including when `setup` or `body` fails partway; the first
/// error is returned.
///
/// # Errors
/// Returns the error from `setup`, `body` or `restore`, in that priority.
pub fn guarded<T>(
    setup: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    if let Err(e) = setup() {
        let _ = restore();
        return Err(e);
    }
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}
