// src/loader.rs
//! Fetches the catalogue CSV and turns it into a [`Dataset`].
//!
//! The loader runs once at startup. Any failure here is fatal: there is no
//! retry, and the caller is expected to surface the [`LoadError`] and stop.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::LoadError;
use crate::types::{Dataset, RowIssue, TitleRecord};

pub const REQUIRED_COLUMNS: [&str; 5] = ["title", "year", "rating", "votes", "genre"];

/// Where the catalogue lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    /// Classifies a location string: `http://` and `https://` are URLs, anything else a path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads and normalizes the catalogue from `source`.
///
/// # Errors
/// Returns `LoadError` if the source is unreachable, a required column is
/// missing, or no row survives parsing.
pub fn load(source: &Source, timeout: Duration) -> Result<Dataset, LoadError> {
    tracing::info!(%source, "loading dataset");
    match source {
        Source::Url(url) => {
            let body = fetch(url, timeout)?;
            from_reader(body.as_slice())
        }
        Source::Path(path) => {
            let file = File::open(path).map_err(|source| LoadError::Io {
                source,
                path: path.clone(),
            })?;
            from_reader(file)
        }
    }
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(fetch_err)?;
    let response = client.get(url).send().map_err(fetch_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(fetch_err)?;
    tracing::debug!(bytes = body.len(), "fetched dataset");
    Ok(body.to_vec())
}

/// Parses CSV text into a dataset. Bad rows are skipped and recorded as
/// [`RowIssue`]s.
///
/// # Errors
/// Returns `LoadError::MissingColumn` or `LoadError::Empty` when the payload
/// cannot produce a usable dataset.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(LoadError::Empty);
    }
    let columns = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    let mut issues = Vec::new();

    for row in rdr.records() {
        match row {
            Ok(row) => {
                let line = row.position().map_or(0, csv::Position::line);
                match columns.parse(&row) {
                    Ok(record) => records.push(record),
                    Err(message) => issues.push(RowIssue { line, message }),
                }
            }
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                issues.push(RowIssue {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }

    for issue in &issues {
        tracing::warn!(line = issue.line, "skipped row: {}", issue.message);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    tracing::info!(rows = records.len(), skipped = issues.len(), "dataset loaded");
    Ok(Dataset::new(records, issues))
}

/// Header positions of the required columns.
struct Columns {
    title: usize,
    year: usize,
    rating: usize,
    votes: usize,
    genre: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            title: find("title")?,
            year: find("year")?,
            rating: find("rating")?,
            votes: find("votes")?,
            genre: find("genre")?,
        })
    }

    fn parse(&self, row: &StringRecord) -> Result<TitleRecord, String> {
        let cell = |idx: usize| row.get(idx).map_or("", str::trim);

        let title = cell(self.title);
        if title.is_empty() {
            return Err("empty title".to_string());
        }

        let votes = parse_optional(cell(self.votes), parse_votes)
            .map_err(|raw| format!("invalid votes `{raw}`"))?;
        let year = parse_optional(cell(self.year), parse_year)
            .map_err(|raw| format!("invalid year `{raw}`"))?;
        let rating = parse_optional(cell(self.rating), parse_number)
            .map_err(|raw| format!("invalid rating `{raw}`"))?;

        let genre = cell(self.genre);
        Ok(TitleRecord {
            title: title.to_string(),
            year,
            rating,
            votes,
            genre: (!genre.is_empty()).then(|| genre.to_string()),
        })
    }
}

/// Blank cells are absent; non-blank cells must parse.
fn parse_optional<T>(raw: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, String> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    parse(raw).map(Some).ok_or_else(|| raw.to_string())
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[allow(clippy::cast_possible_truncation)]
fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    parse_number(raw)
        .filter(|v| v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX))
        .map(|v| v as i32)
}

/// Accepts any finite number, with `,` `_` or space as thousands separators.
pub fn parse_votes(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    parse_number(&cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
title,year,rating,votes,genre
Alpha,2020,8.1,100,Drama
Beta,2019,7.0,50,Comedy
Gamma,2021,9.2,200,\"Drama, Comedy\"
";

    #[test]
    fn parses_rows_and_lowercases_genre() {
        let ds = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        let gamma = &ds.records()[2];
        assert_eq!(gamma.title, "Gamma");
        assert_eq!(gamma.year, Some(2021));
        assert_eq!(gamma.rating, Some(9.2));
        assert_eq!(gamma.votes, Some(200.0));
        assert_eq!(gamma.genre.as_deref(), Some("drama, comedy"));
        assert!(ds.issues().is_empty());
    }

    #[test]
    fn extra_columns_and_header_case_are_tolerated() {
        let csv = " Title ,Extra,YEAR,Rating,Votes,Genre\nAlpha,x,2020,8.1,100,Drama\n";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].title, "Alpha");
        assert_eq!(ds.records()[0].votes, Some(100.0));
    }

    #[test]
    fn missing_column_fails() {
        let csv = "title,year,rating,genre\nAlpha,2020,8.1,drama\n";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("votes")));
    }

    #[test]
    fn empty_payload_fails() {
        assert!(matches!(from_reader("".as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn header_only_fails() {
        let csv = "title,year,rating,votes,genre\n";
        assert!(matches!(from_reader(csv.as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn bad_rows_are_skipped_and_reported() {
        let csv = "\
title,year,rating,votes,genre
,2020,8.1,100,drama
Beta,2019,7.0,lots,comedy
Gamma,,,\"1,500\",
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        let gamma = &ds.records()[0];
        assert_eq!(gamma.votes, Some(1500.0));
        assert_eq!(gamma.year, None);
        assert_eq!(gamma.rating, None);
        assert_eq!(gamma.genre, None);

        assert_eq!(ds.issues().len(), 2);
        assert_eq!(ds.issues()[0].line, 2);
        assert!(ds.issues()[0].message.contains("title"));
        assert!(ds.issues()[1].message.contains("votes"));
    }

    #[test]
    fn votes_accept_any_finite_number() {
        assert_eq!(parse_votes("1234"), Some(1234.0));
        assert_eq!(parse_votes("1234.0"), Some(1234.0));
        assert_eq!(parse_votes("1,234"), Some(1234.0));
        assert_eq!(parse_votes("12.5"), Some(12.5));
        assert_eq!(parse_votes("-3"), Some(-3.0));
        assert_eq!(parse_votes("inf"), None);
        assert_eq!(parse_votes("lots"), None);
    }

    #[test]
    fn unusual_votes_keep_their_rows_and_genres() {
        let csv = "\
title,year,rating,votes,genre
A,2020,8.0,100,drama
B,2020,8.0,12.5,western
C,2020,8.0,-3,horror
D,2020,8.0,,mystery
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert!(ds.issues().is_empty());
        let votes: Vec<_> = ds.records().iter().map(|r| r.votes).collect();
        assert_eq!(votes, [Some(100.0), Some(12.5), Some(-3.0), None]);

        let index = crate::genre::GenreIndex::build(&ds);
        assert_eq!(index.genres(), ["drama", "horror", "mystery", "western"]);

        let ranked = crate::rank::top_n(ds.records(), crate::rank::Metric::Votes, 10);
        let titles: Vec<_> = ranked.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C", "D"]);
    }

    #[test]
    fn float_years_are_accepted() {
        assert_eq!(parse_year("2020.0"), Some(2020));
        assert_eq!(parse_year("20x0"), None);
    }

    #[test]
    fn source_classification() {
        assert_eq!(
            Source::parse("https://example.com/a.csv"),
            Source::Url("https://example.com/a.csv".into())
        );
        assert_eq!(
            Source::parse("data/titles.csv"),
            Source::Path(PathBuf::from("data/titles.csv"))
        );
    }

    #[test]
    fn unreadable_path_is_io_error() {
        let source = Source::Path(PathBuf::from("/definitely/not/here.csv"));
        let err = load(&source, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
