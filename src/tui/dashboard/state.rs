// src/tui/dashboard/state.rs
use crate::catalogue::Catalogue;
use crate::config::Config;
use crate::present::{self, LabelRule, Presentation};
use crate::stats::ColumnSummary;
use crate::view::{Statistic, View, ViewSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    GenreDistribution,
    MostStreamed,
    Statistics,
    Logs,
}

/// Output of the last render, owned so it outlives the selector borrow.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Ranked(Presentation),
    Statistics(Vec<ColumnSummary>),
    Unavailable(String),
}

pub struct DashboardApp<'a> {
    pub catalogue: &'a Catalogue,
    pub config: &'a Config,
    pub active_tab: Tab,
    pub genre_cursor: usize,
    pub statistic: Statistic,
    pub rendered: Option<Rendered>,
    pub logs: Vec<String>,
    pub should_quit: bool,
    pub scroll: u16,
}

impl<'a> DashboardApp<'a> {
    pub fn new(catalogue: &'a Catalogue, config: &'a Config) -> Self {
        let mut app = Self {
            catalogue,
            config,
            active_tab: Tab::GenreDistribution,
            genre_cursor: 0,
            statistic: Statistic::default(),
            rendered: None,
            logs: vec!["Dashboard initialized".to_string()],
            should_quit: false,
            scroll: 0,
        };
        app.log(&format!(
            "Loaded {} titles, {} genres",
            catalogue.dataset().len(),
            catalogue.genres().len()
        ));
        let skipped = catalogue.dataset().issues().len();
        if skipped > 0 {
            app.log(&format!("Skipped {skipped} malformed row(s)"));
        }
        app.refresh();
        app
    }

    pub fn log(&mut self, message: &str) {
        let timestamp = chrono_lite_timestamp();
        self.logs.push(format!("[{timestamp}] {message}"));
        if self.logs.len() > 100 {
            self.logs.remove(0);
        }
    }

    #[must_use]
    pub fn selected_genre(&self) -> Option<&'a str> {
        self.catalogue.genres().get(self.genre_cursor)
    }

    /// The selection shown by the active tab. `None` on the Logs tab or when
    /// there are no genres to pick from.
    #[must_use]
    pub fn selection(&self) -> Option<ViewSelection> {
        match self.active_tab {
            Tab::GenreDistribution => self.selected_genre().map(|g| {
                ViewSelection::GenreDistribution {
                    genre: g.to_string(),
                }
            }),
            Tab::MostStreamed => Some(ViewSelection::MostStreamed(self.statistic)),
            Tab::Statistics => Some(ViewSelection::DescriptiveStatistics),
            Tab::Logs => None,
        }
    }

    /// Re-runs the view selector for the current selection.
    pub fn refresh(&mut self) {
        if self.active_tab == Tab::Logs {
            return;
        }
        let Some(selection) = self.selection() else {
            self.rendered = Some(Rendered::Unavailable("No genres in dataset".to_string()));
            return;
        };

        let (catalogue, config) = (self.catalogue, self.config);
        let selector = catalogue.selector(&config.ranking);
        let rendered = match selector.select(&selection) {
            Ok(View::Ranked { heading, subset }) => {
                let rule = LabelRule::from(&config.display);
                Rendered::Ranked(present::adapt(&heading, &subset, rule))
            }
            Ok(View::Statistics(columns)) => Rendered::Statistics(columns),
            Err(e) => Rendered::Unavailable(e.to_string()),
        };

        if let Rendered::Ranked(p) = &rendered {
            if p.is_empty() {
                self.log(&format!("{selection}: no matching titles"));
            }
        }
        if let Rendered::Unavailable(reason) = &rendered {
            self.log(&format!("{selection}: {reason}"));
        }
        self.rendered = Some(rendered);
    }

    pub fn next_genre(&mut self) {
        let count = self.catalogue.genres().len();
        if count > 0 {
            self.genre_cursor = (self.genre_cursor + 1) % count;
            self.refresh();
        }
    }

    pub fn previous_genre(&mut self) {
        let count = self.catalogue.genres().len();
        if count > 0 {
            self.genre_cursor = (self.genre_cursor + count - 1) % count;
            self.refresh();
        }
    }

    pub fn toggle_statistic(&mut self) {
        self.statistic = self.statistic.toggle();
        self.refresh();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.refresh();
    }

    pub fn next_tab(&mut self) {
        self.set_tab(match self.active_tab {
            Tab::GenreDistribution => Tab::MostStreamed,
            Tab::MostStreamed => Tab::Statistics,
            Tab::Statistics => Tab::Logs,
            Tab::Logs => Tab::GenreDistribution,
        });
    }

    pub fn previous_tab(&mut self) {
        self.set_tab(match self.active_tab {
            Tab::GenreDistribution => Tab::Logs,
            Tab::Logs => Tab::Statistics,
            Tab::Statistics => Tab::MostStreamed,
            Tab::MostStreamed => Tab::GenreDistribution,
        });
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// HH:MM:SS (UTC) without pulling in a date crate.
fn chrono_lite_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let hours = (secs % 86400) / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;
    format!("{hours:02}:{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dataset, TitleRecord};

    fn catalogue() -> Catalogue {
        Catalogue::from_dataset(Dataset::from(vec![
            TitleRecord::new("A", 100, Some("drama")),
            TitleRecord::new("B", 50, Some("comedy")),
            TitleRecord::new("C", 200, Some("drama, comedy")),
        ]))
    }

    fn titles(app: &DashboardApp) -> Vec<String> {
        match &app.rendered {
            Some(Rendered::Ranked(p)) => p.table.rows.iter().map(|r| r.title.clone()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn starts_on_first_genre() {
        let cat = catalogue();
        let cfg = Config::default();
        let app = DashboardApp::new(&cat, &cfg);
        assert_eq!(app.selected_genre(), Some("comedy"));
        assert_eq!(titles(&app), ["C", "B"]);
    }

    #[test]
    fn genre_cursor_wraps_and_rerenders() {
        let cat = catalogue();
        let cfg = Config::default();
        let mut app = DashboardApp::new(&cat, &cfg);
        app.next_genre();
        assert_eq!(app.selected_genre(), Some("drama"));
        assert_eq!(titles(&app), ["C", "A"]);
        app.next_genre();
        assert_eq!(app.selected_genre(), Some("comedy"));
        app.previous_genre();
        assert_eq!(app.selected_genre(), Some("drama"));
    }

    #[test]
    fn streamed_tab_ranks_everything() {
        let cat = catalogue();
        let cfg = Config::default();
        let mut app = DashboardApp::new(&cat, &cfg);
        app.set_tab(Tab::MostStreamed);
        assert_eq!(titles(&app), ["C", "A", "B"]);
        app.toggle_statistic();
        assert_eq!(app.statistic, Statistic::TopPopular);
        assert_eq!(titles(&app), ["C", "A", "B"]);
    }

    #[test]
    fn logs_tab_keeps_last_render() {
        let cat = catalogue();
        let cfg = Config::default();
        let mut app = DashboardApp::new(&cat, &cfg);
        app.set_tab(Tab::Statistics);
        app.next_tab();
        assert_eq!(app.active_tab, Tab::Logs);
        assert!(matches!(app.rendered, Some(Rendered::Statistics(_))));
        assert!(app.selection().is_none());
    }

    #[test]
    fn empty_genre_index_is_unavailable() {
        let cat = Catalogue::from_dataset(Dataset::from(vec![TitleRecord::new("A", 1, None)]));
        let cfg = Config::default();
        let app = DashboardApp::new(&cat, &cfg);
        assert!(matches!(app.rendered, Some(Rendered::Unavailable(_))));
    }
}
