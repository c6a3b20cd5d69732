// src/tui/dashboard/input.rs
use super::state::{DashboardApp, Tab};
use crossterm::event::{KeyCode, KeyModifiers};

pub fn handle_input(code: KeyCode, modifiers: KeyModifiers, app: &mut DashboardApp) {
    if handle_global_navigation(code, modifiers, app) {
        return;
    }

    match app.active_tab {
        Tab::GenreDistribution => handle_genre_input(code, app),
        Tab::MostStreamed => handle_statistic_input(code, app),
        Tab::Logs => handle_scrolling(code, app),
        Tab::Statistics => {}
    }
}

fn handle_global_navigation(
    code: KeyCode,
    modifiers: KeyModifiers,
    app: &mut DashboardApp,
) -> bool {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c'))
    {
        app.quit();
        return true;
    }

    if handle_tab_nav(code, modifiers, app) {
        return true;
    }

    handle_view_switch(code, app)
}

fn handle_tab_nav(code: KeyCode, modifiers: KeyModifiers, app: &mut DashboardApp) -> bool {
    match (modifiers, code) {
        (_, KeyCode::Tab) => {
            app.next_tab();
            true
        }
        (_, KeyCode::BackTab) => {
            app.previous_tab();
            true
        }
        (_, KeyCode::Char('r')) => {
            app.refresh();
            app.log("Redrawn");
            true
        }
        _ => false,
    }
}

fn handle_view_switch(code: KeyCode, app: &mut DashboardApp) -> bool {
    let tab = match code {
        KeyCode::Char('1') => Tab::GenreDistribution,
        KeyCode::Char('2') => Tab::MostStreamed,
        KeyCode::Char('3') => Tab::Statistics,
        KeyCode::Char('4') => Tab::Logs,
        _ => return false,
    };
    app.set_tab(tab);
    true
}

fn handle_genre_input(code: KeyCode, app: &mut DashboardApp) {
    match code {
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j' | 'l') => app.next_genre(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k' | 'h') => app.previous_genre(),
        _ => {}
    }
}

fn handle_statistic_input(code: KeyCode, app: &mut DashboardApp) {
    if matches!(
        code,
        KeyCode::Char('s' | 'h' | 'l' | 'j' | 'k')
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
    ) {
        app.toggle_statistic();
    }
}

fn handle_scrolling(code: KeyCode, app: &mut DashboardApp) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll = app.scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll = app.scroll.saturating_sub(1),
        _ => {}
    }
}
