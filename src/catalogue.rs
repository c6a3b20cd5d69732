// src/catalogue.rs
use std::time::Duration;

use crate::config::{RankingConfig, SourceConfig};
use crate::error::LoadError;
use crate::genre::GenreIndex;
use crate::loader::{self, Source};
use crate::types::Dataset;
use crate::view::ViewSelector;

/// The loaded dataset and its genre index. Built once at startup and only
/// borrowed afterwards.
#[derive(Debug, Clone)]
pub struct Catalogue {
    dataset: Dataset,
    genres: GenreIndex,
}

impl Catalogue {
    /// Fetches, parses and indexes the configured source.
    ///
    /// # Errors
    /// Returns `LoadError` if the source cannot produce a dataset.
    pub fn load(source: &SourceConfig) -> Result<Self, LoadError> {
        let location = Source::parse(&source.location);
        let dataset = loader::load(&location, Duration::from_secs(source.timeout_secs))?;
        Ok(Self::from_dataset(dataset))
    }

    #[must_use]
    pub fn from_dataset(dataset: Dataset) -> Self {
        let genres = GenreIndex::build(&dataset);
        Self { dataset, genres }
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn genres(&self) -> &GenreIndex {
        &self.genres
    }

    #[must_use]
    pub fn selector<'a>(&'a self, ranking: &'a RankingConfig) -> ViewSelector<'a> {
        ViewSelector::new(&self.dataset, &self.genres, ranking)
    }
}
