// src/view.rs
//! Maps a user's page/statistic choice onto a ranking of the dataset.

use std::fmt;

use serde::Serialize;

use crate::config::RankingConfig;
use crate::error::SelectionError;
use crate::genre::GenreIndex;
use crate::rank::{self, Metric, RankedSubset};
use crate::stats::{self, ColumnSummary};
use crate::types::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    GenreDistribution,
    MostStreamed,
    DescriptiveStatistics,
}

impl Page {
    pub const ALL: [Self; 3] = [
        Self::GenreDistribution,
        Self::MostStreamed,
        Self::DescriptiveStatistics,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GenreDistribution => "Genre Distribution",
            Self::MostStreamed => "Most Streamed",
            Self::DescriptiveStatistics => "Descriptive Statistics",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Statistic {
    #[default]
    TopStreamed,
    TopPopular,
}

impl Statistic {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::TopStreamed => Self::TopPopular,
            Self::TopPopular => Self::TopStreamed,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TopStreamed => "Most Streamed",
            Self::TopPopular => "Most Popular",
        }
    }
}

/// The current page and its dependent sub-choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSelection {
    GenreDistribution { genre: String },
    MostStreamed(Statistic),
    DescriptiveStatistics,
}

impl ViewSelection {
    #[must_use]
    pub fn page(&self) -> Page {
        match self {
            Self::GenreDistribution { .. } => Page::GenreDistribution,
            Self::MostStreamed(_) => Page::MostStreamed,
            Self::DescriptiveStatistics => Page::DescriptiveStatistics,
        }
    }
}

impl fmt::Display for ViewSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenreDistribution { genre } => write!(f, "{} / {genre}", self.page().label()),
            Self::MostStreamed(stat) => write!(f, "{} / {}", self.page().label(), stat.label()),
            Self::DescriptiveStatistics => f.write_str(self.page().label()),
        }
    }
}

/// What a selection resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Ranked {
        heading: String,
        subset: RankedSubset<'a>,
    },
    Statistics(Vec<ColumnSummary>),
}

impl View<'_> {
    /// True for a ranking with no rows. Rendered as an empty chart and table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Ranked { subset, .. } => subset.is_empty(),
            Self::Statistics(columns) => columns.is_empty(),
        }
    }
}

/// Resolves selections against a loaded dataset. Holds only borrows, so one
/// can be built per render.
pub struct ViewSelector<'a> {
    dataset: &'a Dataset,
    genres: &'a GenreIndex,
    ranking: &'a RankingConfig,
}

impl<'a> ViewSelector<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset, genres: &'a GenreIndex, ranking: &'a RankingConfig) -> Self {
        Self {
            dataset,
            genres,
            ranking,
        }
    }

    #[must_use]
    pub fn genres(&self) -> &'a GenreIndex {
        self.genres
    }

    /// Computes the view for `selection`.
    ///
    /// # Errors
    /// Returns `SelectionError::UnknownGenre` if a genre selection names a
    /// token that is not in the genre index.
    pub fn select(&self, selection: &ViewSelection) -> Result<View<'a>, SelectionError> {
        tracing::debug!(%selection, "resolving view");
        let n = self.ranking.top_n;
        let view = match selection {
            ViewSelection::GenreDistribution { genre } => {
                let token = genre.trim().to_lowercase();
                if !self.genres.contains(&token) {
                    return Err(SelectionError::UnknownGenre(genre.clone()));
                }
                let filtered = rank::filter_by_genre(self.dataset.records(), &token);
                View::Ranked {
                    heading: format!("Top {n} Shows in {token} Genre"),
                    subset: rank::top_n(filtered, Metric::Votes, n),
                }
            }
            ViewSelection::MostStreamed(stat) => {
                let metric = match stat {
                    Statistic::TopStreamed => Metric::Votes,
                    Statistic::TopPopular => self.ranking.popular_metric,
                };
                View::Ranked {
                    heading: format!("Top {n} {} Shows", stat.label()),
                    subset: rank::top_n(self.dataset.records(), metric, n),
                }
            }
            ViewSelection::DescriptiveStatistics => {
                View::Statistics(stats::describe(self.dataset))
            }
        };

        if view.is_empty() {
            tracing::warn!(%selection, "selection produced no rows");
        }
        Ok(view)
    }
}
