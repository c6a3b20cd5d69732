pub mod catalogue;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod genre;
pub mod loader;
pub mod logging;
pub mod present;
pub mod rank;
pub mod reporting;
pub mod stats;
#[cfg(feature = "tui")]
pub mod tui;
pub mod types;
pub mod view;

pub use catalogue::Catalogue;
pub use error::{DashError, LoadError, SelectionError};
pub use types::{Dataset, TitleRecord};
