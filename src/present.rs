// src/present.rs
//! Shapes a ranked subset into what the chart and table sinks consume.

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::rank::RankedSubset;

pub const ELLIPSIS: &str = "...";
pub const CATEGORY_AXIS: &str = "Show Title";
pub const TABLE_COLUMNS: [&str; 4] = ["title", "year", "rating", "votes"];

/// Axis label truncation: titles longer than `max_chars` keep their first
/// `keep_chars` characters followed by `...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRule {
    pub max_chars: usize,
    pub keep_chars: usize,
}

impl Default for LabelRule {
    fn default() -> Self {
        Self {
            max_chars: 50,
            keep_chars: 47,
        }
    }
}

impl From<&DisplayConfig> for LabelRule {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            max_chars: display.label_max_chars,
            keep_chars: display.label_keep_chars,
        }
    }
}

impl LabelRule {
    /// Counts characters, not bytes.
    #[must_use]
    pub fn apply(&self, title: &str) -> String {
        if title.chars().count() <= self.max_chars {
            return title.to_string();
        }
        let mut label: String = title.chars().take(self.keep_chars).collect();
        label.push_str(ELLIPSIS);
        label
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Axis label, possibly truncated.
    pub label: String,
    pub title: String,
    /// Vote count; `None` draws no bar.
    pub value: Option<f64>,
}

/// Bar chart input. `points[0]` is the top-ranked entry and is drawn first
/// along the category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub heading: String,
    pub value_axis: String,
    pub category_axis: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Largest present value, floored at zero.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .filter_map(|p| p.value)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub votes: Option<f64>,
}

/// The ranked subset projected to `title, year, rating, votes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableListing {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Both sink inputs for one ranked view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub chart: ChartSeries,
    pub table: TableListing,
}

impl Presentation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }
}

/// Builds the chart series and table for `subset`. Pure; the subset is only read.
#[must_use]
pub fn adapt(heading: &str, subset: &RankedSubset<'_>, rule: LabelRule) -> Presentation {
    let points = subset
        .records()
        .iter()
        .map(|r| ChartPoint {
            label: rule.apply(&r.title),
            title: r.title.clone(),
            value: r.votes,
        })
        .collect();

    let rows = subset
        .records()
        .iter()
        .enumerate()
        .map(|(index, r)| TableRow {
            index,
            title: r.title.clone(),
            year: r.year,
            rating: r.rating,
            votes: r.votes,
        })
        .collect();

    Presentation {
        chart: ChartSeries {
            heading: heading.to_string(),
            value_axis: "Votes".to_string(),
            category_axis: CATEGORY_AXIS.to_string(),
            points,
        },
        table: TableListing {
            columns: TABLE_COLUMNS.iter().map(ToString::to_string).collect(),
            rows,
        },
    }
}
