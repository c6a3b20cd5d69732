// src/types.rs
use serde::Serialize;

/// One row of the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    /// Any finite number; `None` when the cell was blank.
    pub votes: Option<f64>,
    /// Comma-separated genre tags, lowercased at load. `None` when the cell was empty.
    pub genre: Option<String>,
}

impl TitleRecord {
    #[must_use]
    pub fn new(title: &str, votes: impl Into<f64>, genre: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            year: None,
            rating: None,
            votes: Some(votes.into()),
            genre: genre.map(str::to_string),
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn without_votes(mut self) -> Self {
        self.votes = None;
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// A CSV row that was dropped during load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowIssue {
    pub line: u64,
    pub message: String,
}

/// The loaded catalogue. Read-only once constructed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<TitleRecord>,
    issues: Vec<RowIssue>,
}

impl Dataset {
    /// Builds a dataset, lowercasing every genre cell.
    #[must_use]
    pub fn new(mut records: Vec<TitleRecord>, issues: Vec<RowIssue>) -> Self {
        for record in &mut records {
            if let Some(genre) = record.genre.as_mut() {
                *genre = genre.to_lowercase();
            }
        }
        Self { records, issues }
    }

    #[must_use]
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    /// Rows skipped while parsing.
    #[must_use]
    pub fn issues(&self) -> &[RowIssue] {
        &self.issues
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

impl From<Vec<TitleRecord>> for Dataset {
    fn from(records: Vec<TitleRecord>) -> Self {
        Self::new(records, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_is_lowercased_on_construction() {
        let ds = Dataset::from(vec![
            TitleRecord::new("A", 1, Some("Drama, Sci-Fi")),
            TitleRecord::new("B", 2, None),
        ]);
        assert_eq!(ds.records()[0].genre.as_deref(), Some("drama, sci-fi"));
        assert_eq!(ds.records()[1].genre, None);
        assert_eq!(ds.records()[0].title, "A");
    }
}
