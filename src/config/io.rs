// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::ConfigError;

/// Reads `path` if it exists; a missing file yields the defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content).map_err(|source| ConfigError::Parse {
        source,
        path: path.to_path_buf(),
    })
}

/// Parses config text.
///
/// # Errors
/// Returns the TOML error on malformed input.
pub fn parse_toml(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Writes `config` to `path` as pretty TOML.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })
}
