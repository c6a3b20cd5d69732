// tests/integration_loader.rs - load from disk through to a rendered view
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use streamdash_core::config::{Config, SourceConfig};
use streamdash_core::present::{adapt, LabelRule, ELLIPSIS};
use streamdash_core::view::{Statistic, View, ViewSelection};
use streamdash_core::{Catalogue, LoadError};
use tempfile::TempDir;

const CSV: &str = "\
title,year,rating,votes,genre
Short Show,2021,7.5,1200,Drama
An Extremely Long Show Title That Exceeds Fifty Characters For Sure,2024,8.8,5400,\"Comedy, Drama\"
Broken Row,2020,6.0,n/a,Drama
Space Lanes,2019,8.1,3100,SCI-FI
";

fn write_csv(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("titles.csv");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn source(location: String) -> SourceConfig {
    SourceConfig {
        location,
        timeout_secs: 5,
    }
}

#[test]
fn loads_indexes_and_ranks_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalogue = Catalogue::load(&source(write_csv(&dir, CSV))).unwrap();

    assert_eq!(catalogue.dataset().len(), 3);
    assert_eq!(catalogue.dataset().issues().len(), 1);
    assert_eq!(catalogue.genres().genres(), ["comedy", "drama", "sci-fi"]);
    assert!(catalogue
        .dataset()
        .records()
        .iter()
        .all(|r| r.genre.as_deref().is_some_and(|g| g == g.to_lowercase())));

    let config = Config::default();
    let view = catalogue
        .selector(&config.ranking)
        .select(&ViewSelection::MostStreamed(Statistic::TopStreamed))
        .unwrap();
    let View::Ranked { heading, subset } = view else {
        panic!("expected a ranked view");
    };
    let p = adapt(&heading, &subset, LabelRule::from(&config.display));

    let long = &p.chart.points[0];
    assert_eq!(long.value, Some(5400.0));
    assert!(long.label.ends_with(ELLIPSIS));
    assert_eq!(long.label.chars().count(), 50);
    assert_eq!(p.table.rows[0].title.chars().count(), 67);
    assert_eq!(p.table.rows[1].title, "Space Lanes");
    assert_eq!(p.table.rows[2].rating, Some(7.5));
}

/// Answers a single HTTP request on a loopback port with `status` and `body`.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 512];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/titles.csv")
}

#[test]
fn loads_from_http_source() {
    let url = serve_once("200 OK", CSV);
    let catalogue = Catalogue::load(&source(url)).unwrap();
    assert_eq!(catalogue.dataset().len(), 3);
    assert_eq!(catalogue.genres().genres(), ["comedy", "drama", "sci-fi"]);
}

#[test]
fn http_error_status_is_a_load_error() {
    let url = serve_once("404 Not Found", "missing");
    let err = Catalogue::load(&source(url)).unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }), "{err:?}");
}

#[test]
fn refused_connection_is_a_fetch_error() {
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let err = Catalogue::load(&source(format!("http://{addr}/titles.csv"))).unwrap_err();
    assert!(matches!(err, LoadError::Fetch { .. }), "{err:?}");
}

#[test]
fn missing_column_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "title,year,votes,genre\nA,2020,1,drama\n");
    let err = Catalogue::load(&source(path)).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("rating")));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let err = Catalogue::load(&source(path.to_string_lossy().into_owned())).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn all_rows_bad_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "title,year,rating,votes,genre\n,2020,1,1,drama\n");
    assert!(matches!(
        Catalogue::load(&source(path)),
        Err(LoadError::Empty)
    ));
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("streamdash.toml");

    let mut config = Config::default();
    config.ranking.top_n = 5;
    config.source.location = "data/titles.csv".into();
    config.save(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.ranking.top_n, 5);
    assert_eq!(loaded.source.location, "data/titles.csv");
    assert_eq!(loaded.display.label_max_chars, 50);
}

#[test]
fn absent_config_uses_defaults() {
    let loaded = Config::load_from(Path::new("/no/such/streamdash.toml")).unwrap();
    assert_eq!(loaded.ranking.top_n, 10);
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("streamdash.toml");
    fs::write(&path, "[ranking]\ntop_n = 0\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}
