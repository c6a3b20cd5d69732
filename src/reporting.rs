//! Console output for the dashboard's views.
//!
//! Text mode draws the chart series as horizontal bars followed by the table;
//! JSON mode serializes the same structures for scripts.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

use crate::genre::GenreIndex;
use crate::present::{ChartSeries, Presentation, TableListing};
use crate::stats::ColumnSummary;

const BAR_WIDTH: f64 = 40.0;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prints a ranked view to stdout.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_presentation(title: &str, p: &Presentation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(p)?),
        OutputFormat::Text => {
            println!("{}", title.bold());
            print!("{}", render_presentation(p));
        }
    }
    Ok(())
}

/// Prints the descriptive statistics page.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_statistics(title: &str, columns: &[ColumnSummary], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(columns)?),
        OutputFormat::Text => {
            println!("{}", title.bold());
            print!("{}", render_statistics(columns));
        }
    }
    Ok(())
}

/// Prints the genre index, one per line.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn print_genres(index: &GenreIndex, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(index.genres())?),
        OutputFormat::Text => {
            for genre in index.genres() {
                println!("{genre}");
            }
            println!("{}", format!("{} genres", index.len()).dimmed());
        }
    }
    Ok(())
}

#[must_use]
pub fn render_presentation(p: &Presentation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", p.chart.heading.cyan().bold());

    if p.is_empty() {
        let _ = writeln!(out, "{}", "No titles match this selection.".yellow());
        return out;
    }

    out.push_str(&render_chart(&p.chart));
    out.push('\n');
    out.push_str(&render_table(&p.table));
    out
}

fn render_chart(chart: &ChartSeries) -> String {
    let mut out = String::new();
    let width = chart
        .points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.max_value();

    let _ = writeln!(
        out,
        "{}",
        format!("{} vs {}", chart.category_axis, chart.value_axis).dimmed()
    );
    for point in &chart.points {
        let len = bar_len(point.value, max);
        let _ = writeln!(
            out,
            "{:<width$} {} {}",
            point.label,
            "█".repeat(len).red(),
            fmt_votes(point.value)
        );
    }
    out
}

fn render_table(table: &TableListing) -> String {
    let mut out = String::new();
    let title_width = table
        .rows
        .iter()
        .map(|r| r.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let header = format!(
        "{:>3}  {:<title_width$}  {:>4}  {:>6}  {:>12}",
        "", "title", "year", "rating", "votes"
    );
    let _ = writeln!(out, "{}", header.bold());

    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<title_width$}  {:>4}  {:>6}  {:>12}",
            row.index,
            row.title,
            row.year.map_or_else(|| "-".to_string(), |y| y.to_string()),
            row.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}")),
            fmt_votes(row.votes)
        );
    }
    out
}

#[must_use]
pub fn render_statistics(columns: &[ColumnSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:<8} {:>7} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
        )
        .bold()
    );
    for c in columns {
        let _ = writeln!(
            out,
            "{:<8} {:>7} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
            c.column,
            c.count,
            fmt_stat(c.mean),
            fmt_stat(c.std),
            fmt_stat(c.min),
            fmt_stat(c.q25),
            fmt_stat(c.median),
            fmt_stat(c.q75),
            fmt_stat(c.max)
        );
    }
    out
}

#[must_use]
pub fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Bar length in cells for `value` against the largest bar. Non-positive and
/// absent values draw nothing.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_len(value: Option<f64>, max: f64) -> usize {
    match value {
        Some(v) if v > 0.0 && max > 0.0 => (v / max * BAR_WIDTH).round() as usize,
        _ => 0,
    }
}

#[must_use]
pub fn fmt_votes(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), group_thousands)
}

/// `1234567` -> `1,234,567`, `-1234.5` -> `-1,234.5`.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let text = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    };
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (digits, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}
