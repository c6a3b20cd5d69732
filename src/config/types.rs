use serde::{Deserialize, Serialize};

use crate::rank::Metric;

pub const DEFAULT_SOURCE: &str =
    "https://github.com/silviaazahro/Netflix-/raw/main/cleaned_data.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `http(s)://` URL or a local file path.
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Metric behind the "Top Popular" statistic.
    #[serde(default)]
    pub popular_metric: Metric,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            popular_metric: Metric::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_label_max")]
    pub label_max_chars: usize,
    #[serde(default = "default_label_keep")]
    pub label_keep_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            label_max_chars: default_label_max(),
            label_keep_chars: default_label_keep(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file used while the TUI owns the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_location() -> String { DEFAULT_SOURCE.to_string() }
const fn default_timeout_secs() -> u64 { 30 }
const fn default_top_n() -> usize { 10 }
fn default_title() -> String { "Streaming Dashboard".to_string() }
const fn default_label_max() -> usize { 50 }
const fn default_label_keep() -> usize { 47 }
fn default_level() -> String { "info".to_string() }

/// On-disk shape of `streamdash.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
