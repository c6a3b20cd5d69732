// src/stats.rs
//! Summary statistics over the numeric columns.

use serde::Serialize;

use crate::rank::Metric;
use crate::types::Dataset;

const COLUMNS: [(&str, Metric); 3] = [
    ("year", Metric::Year),
    ("rating", Metric::Rating),
    ("votes", Metric::Votes),
];

/// Count, moments and quartiles of one column. Blank cells are not counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Summarizes `year`, `rating` and `votes`.
#[must_use]
pub fn describe(dataset: &Dataset) -> Vec<ColumnSummary> {
    COLUMNS
        .iter()
        .map(|(name, metric)| {
            let values: Vec<f64> = dataset
                .records()
                .iter()
                .filter_map(|r| metric.value(r))
                .collect();
            summarize(name, values)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn summarize(column: &str, mut values: Vec<f64>) -> ColumnSummary {
    values.sort_by(f64::total_cmp);
    let count = values.len();

    let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
    let std = mean.filter(|_| count > 1).map(|m| {
        let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

/// Linear interpolation between the closest ranks of an ascending slice.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let pos = q * last as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let (a, b) = (sorted.get(lo)?, sorted.get(hi)?);
    Some(a + (b - a) * (pos - lo as f64))
}
