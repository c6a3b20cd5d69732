// src/rank.rs
//! Genre filtering and top-N ranking.
//!
//! Both operations borrow from the dataset and never mutate it. Ranking uses
//! a stable sort, so records with equal metric values keep their input order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::TitleRecord;

pub const DEFAULT_TOP_N: usize = 10;

/// Numeric column a ranking is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Votes,
    Rating,
    Year,
}

impl Metric {
    /// Value of this metric for `record`; `None` when the cell was blank.
    #[must_use]
    pub fn value(self, record: &TitleRecord) -> Option<f64> {
        match self {
            Self::Votes => record.votes,
            Self::Rating => record.rating,
            Self::Year => record.year.map(f64::from),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Votes => "Votes",
            Self::Rating => "Rating",
            Self::Year => "Year",
        }
    }

    /// Descending order; absent values sort after every present one.
    fn compare_desc(self, a: &TitleRecord, b: &TitleRecord) -> Ordering {
        match (self.value(a), self.value(b)) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keeps records whose genre cell contains `token` as a case-insensitive
/// substring. This is raw containment, so `"fi"` matches `"sci-fi"`.
/// Records without a genre never match.
#[must_use]
pub fn filter_by_genre<'a, I>(records: I, token: &str) -> Vec<&'a TitleRecord>
where
    I: IntoIterator<Item = &'a TitleRecord>,
{
    let needle = token.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            r.genre
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(&needle))
        })
        .collect()
}

/// An ordered top-N slice of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSubset<'a> {
    records: Vec<&'a TitleRecord>,
    metric: Metric,
}

impl<'a> RankedSubset<'a> {
    #[must_use]
    pub fn records(&self) -> &[&'a TitleRecord] {
        &self.records
    }

    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Stable-sorts `subset` descending by `metric` and keeps the first `n`.
#[must_use]
pub fn top_n<'a, I>(subset: I, metric: Metric, n: usize) -> RankedSubset<'a>
where
    I: IntoIterator<Item = &'a TitleRecord>,
{
    let mut records: Vec<&'a TitleRecord> = subset.into_iter().collect();
    records.sort_by(|a, b| metric.compare_desc(a, b));
    records.truncate(n);
    RankedSubset { records, metric }
}
