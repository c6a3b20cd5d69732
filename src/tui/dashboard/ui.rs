// src/tui/dashboard/ui.rs
use crate::present::{ChartSeries, Presentation, TableListing};
use crate::reporting::{fmt_stat, fmt_votes};
use crate::stats::ColumnSummary;
use crate::tui::dashboard::state::{DashboardApp, Rendered, Tab};
use crate::view::Page;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs,
    },
    Frame,
};

pub fn draw(f: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header/Tabs
            Constraint::Length(1), // Selector
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_selector(f, app, chunks[1]);

    match app.active_tab {
        Tab::Logs => draw_logs(f, app, chunks[2]),
        _ => draw_content(f, app, chunks[2]),
    }

    draw_footer(f, app, chunks[3]);
}

fn draw_tabs(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let titles: Vec<_> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| format!("[{}] {}", i + 1, page.label()))
        .chain(std::iter::once("[4] Logs".to_string()))
        .map(|t| Line::from(Span::styled(t, Style::default().fg(Color::Red))))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.config.display.title.as_str());

    let tabs = Tabs::new(titles)
        .block(block)
        .select(app.active_tab as usize)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );

    f.render_widget(tabs, area);
}

fn draw_selector(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let text = match app.active_tab {
        Tab::GenreDistribution => match app.selected_genre() {
            Some(genre) => format!(
                " Genre: < {genre} >  ({}/{})",
                app.genre_cursor + 1,
                app.catalogue.genres().len()
            ),
            None => " Genre: (none)".to_string(),
        },
        Tab::MostStreamed => format!(" Statistic: < {} >", app.statistic.label()),
        Tab::Statistics => format!(" {} titles", app.catalogue.dataset().len()),
        Tab::Logs => String::new(),
    };
    let p = Paragraph::new(text).style(Style::default().fg(Color::Yellow));
    f.render_widget(p, area);
}

fn draw_content(f: &mut Frame, app: &DashboardApp, area: Rect) {
    match &app.rendered {
        Some(Rendered::Ranked(p)) => draw_ranked(f, p, area),
        Some(Rendered::Statistics(columns)) => draw_statistics(f, columns, area),
        Some(Rendered::Unavailable(reason)) => {
            let p = Paragraph::new(reason.as_str())
                .block(Block::default().borders(Borders::ALL).title("Unavailable"));
            f.render_widget(p, area);
        }
        None => {
            let p = Paragraph::new("Loading...").block(Block::default().borders(Borders::ALL));
            f.render_widget(p, area);
        }
    }
}

fn draw_ranked(f: &mut Frame, p: &Presentation, area: Rect) {
    if p.is_empty() {
        let msg = Paragraph::new("No titles match this selection.")
            .block(Block::default().borders(Borders::ALL).title(p.chart.heading.as_str()));
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_chart(f, &p.chart, chunks[0]);
    draw_table(f, &p.table, chunks[1]);
}

fn draw_chart(f: &mut Frame, chart: &ChartSeries, area: Rect) {
    let bars: Vec<Bar> = chart
        .points
        .iter()
        .map(|pt| {
            Bar::default()
                .value(bar_value(pt.value))
                .label(Line::from(pt.label.as_str()))
                .text_value(fmt_votes(pt.value))
        })
        .collect();

    let title = format!(
        "{} ({} by {})",
        chart.heading, chart.category_axis, chart.value_axis
    );
    let barchart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Red))
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .data(BarGroup::default().bars(&bars));

    f.render_widget(barchart, area);
}

/// Bars take whole non-negative lengths; the label still shows the real value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_value(value: Option<f64>) -> u64 {
    value.map_or(0, |v| v.max(0.0).round() as u64)
}

fn draw_table(f: &mut Frame, table: &TableListing, area: Rect) {
    let header = Row::new(
        std::iter::once(String::new())
            .chain(table.columns.iter().cloned())
            .map(Cell::from),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.index.to_string()),
                Cell::from(r.title.as_str()),
                Cell::from(r.year.map_or_else(|| "-".to_string(), |y| y.to_string())),
                Cell::from(r.rating.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))),
                Cell::from(fmt_votes(r.votes)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(12),
    ];
    let t = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Titles"));
    f.render_widget(t, area);
}

fn draw_statistics(f: &mut Frame, columns: &[ColumnSummary], area: Rect) {
    let header = Row::new(["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = columns
        .iter()
        .map(|c| {
            Row::new(vec![
                c.column.clone(),
                c.count.to_string(),
                fmt_stat(c.mean),
                fmt_stat(c.std),
                fmt_stat(c.min),
                fmt_stat(c.q25),
                fmt_stat(c.median),
                fmt_stat(c.q75),
                fmt_stat(c.max),
            ])
        })
        .collect();

    let mut widths = vec![Constraint::Length(8), Constraint::Length(7)];
    widths.extend(std::iter::repeat(Constraint::Length(12)).take(7));

    let t = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Descriptive Statistics"));
    f.render_widget(t, area);
}

fn draw_logs(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let logs: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .skip(usize::from(app.scroll))
        .map(|s| ListItem::new(Line::from(s.as_str())))
        .collect();

    let list = List::new(logs).block(Block::default().borders(Borders::ALL).title("Activity"));
    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let base = "q: Quit | TAB: Switch | 1-4: Jump | r: Redraw";
    let text = match app.active_tab {
        Tab::GenreDistribution => format!("{base} | j/k: Genre"),
        Tab::MostStreamed => format!("{base} | s: Statistic"),
        Tab::Logs => format!("{base} | j/k: Scroll"),
        Tab::Statistics => base.to_string(),
    };
    let p = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(p, area);
}
