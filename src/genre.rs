// src/genre.rs
use std::collections::BTreeSet;

use crate::types::Dataset;

/// Sorted, duplicate-free genre tokens present in a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreIndex {
    genres: Vec<String>,
}

impl GenreIndex {
    /// Splits every genre cell on `,`, trims and lowercases each token, and
    /// keeps the distinct non-empty ones in ascending order.
    #[must_use]
    pub fn build(dataset: &Dataset) -> Self {
        let set: BTreeSet<String> = dataset
            .records()
            .iter()
            .filter_map(|r| r.genre.as_deref())
            .flat_map(|cell| cell.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();

        tracing::debug!(genres = set.len(), "genre index built");
        Self {
            genres: set.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    #[must_use]
    pub fn contains(&self, genre: &str) -> bool {
        let needle = genre.trim().to_lowercase();
        self.genres.binary_search(&needle).is_ok()
    }

    #[must_use]
    pub fn position(&self, genre: &str) -> Option<usize> {
        self.genres.iter().position(|g| g == genre)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.genres.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genres.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TitleRecord;

    fn ds(genres: &[Option<&str>]) -> Dataset {
        let records = genres
            .iter()
            .enumerate()
            .map(|(i, g)| TitleRecord::new(&format!("t{i}"), 1, *g))
            .collect::<Vec<_>>();
        Dataset::from(records)
    }

    #[test]
    fn tokens_are_trimmed_deduped_and_sorted() {
        let index = GenreIndex::build(&ds(&[
            Some("Drama,  Comedy"),
            Some("comedy ,sci-fi"),
            Some(" , ,drama"),
            None,
        ]));
        assert_eq!(index.genres(), ["comedy", "drama", "sci-fi"]);
    }

    #[test]
    fn independent_of_row_order() {
        let a = GenreIndex::build(&ds(&[Some("b, a"), Some("c")]));
        let b = GenreIndex::build(&ds(&[Some("c"), Some("a, b")]));
        assert_eq!(a, b);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = GenreIndex::build(&ds(&[Some("Drama")]));
        assert!(index.contains("DRAMA"));
        assert!(index.contains(" drama "));
        assert!(!index.contains("dram"));
        assert_eq!(index.position("drama"), Some(0));
        assert_eq!(index.get(0), Some("drama"));
    }

    #[test]
    fn empty_dataset_has_empty_index() {
        let index = GenreIndex::build(&Dataset::default());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
