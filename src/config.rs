// Configuration loading and parsing (config/board.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// board.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire board.toml file.
#[derive(Debug, Clone, Deserialize)]
struct BoardFile {
    data: DataSection,
    #[serde(default)]
    display: DisplaySection,
}

#[derive(Debug, Clone, Deserialize)]
struct DataSection {
    /// Path to the prospect dataset JSON document.
    dataset: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplaySection {
    /// Maximum roster rows to print; 0 means no limit.
    #[serde(default)]
    roster_limit: usize,
}

/// The public config assembled from the board.toml sections.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: String,
    pub roster_limit: usize,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/board.toml` relative to
/// the given `base_dir`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("board.toml");
    let text = read_file(&path)?;
    let file: BoardFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        dataset_path: file.data.dataset,
        roster_limit: file.display.roster_limit,
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.dataset_path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.dataset".into(),
            message: "must not be empty".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
