// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    Config, DisplayConfig, LoggingConfig, RankingConfig, SourceConfig, DEFAULT_SOURCE,
};

use crate::error::ConfigError;
use std::path::Path;

pub const CONFIG_FILE: &str = "streamdash.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `streamdash.toml` from the working directory, or defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads and validates the config at `path`.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed, or fails validation.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = io::load_toml_config(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ranking.top_n == 0 {
            return Err(ConfigError::Invalid("ranking.top_n must be at least 1".into()));
        }
        if self.display.label_keep_chars >= self.display.label_max_chars {
            return Err(ConfigError::Invalid(
                "display.label_keep_chars must be smaller than display.label_max_chars".into(),
            ));
        }
        if self.source.location.trim().is_empty() {
            return Err(ConfigError::Invalid("source.location is empty".into()));
        }
        Ok(())
    }

    /// Saves the current configuration to `path`.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        io::save_to_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::Metric;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = io::parse_toml("").unwrap();
        assert_eq!(cfg.ranking.top_n, 10);
        assert_eq!(cfg.ranking.popular_metric, Metric::Votes);
        assert_eq!(cfg.display.label_max_chars, 50);
        assert_eq!(cfg.display.label_keep_chars, 47);
        assert_eq!(cfg.source.location, DEFAULT_SOURCE);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn popular_metric_is_configurable() {
        let cfg = io::parse_toml("[ranking]\npopular_metric = \"rating\"\n").unwrap();
        assert_eq!(cfg.ranking.popular_metric, Metric::Rating);
        assert_eq!(cfg.ranking.top_n, 10);
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let mut cfg = Config::new();
        cfg.ranking.top_n = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn keep_must_be_below_max() {
        let mut cfg = Config::new();
        cfg.display.label_keep_chars = 50;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(io::parse_toml("[ranking\ntop_n = ").is_err());
    }
}
