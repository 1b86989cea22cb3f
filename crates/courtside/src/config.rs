// Configuration loading and validation (config/courtside.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Every section is optional; absent keys take the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
    /// File the config was read from; `None` when the defaults were used.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the seven league CSV files.
    pub base_path: String,
    /// Run the column-pruning cleaners before parsing.
    pub clean: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_path: "data/basketballPlayoffs".into(),
            clean: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub first_year: u32,
    pub last_year: u32,
    /// Print only the top N teams per season. `None` prints every team.
    pub top: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            first_year: 1,
            last_year: 10,
            top: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".into(),
            filter: "courtside=info,courtside_core=info,warn".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load `config/courtside.toml` relative to `base_dir`. A missing file yields
/// the defaults; a present file must parse and validate.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("courtside.toml");

    let config = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        let mut config = toml::from_str::<Config>(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        config.source = Some(path);
        config
    } else {
        Config::default()
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.data.base_path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "data.base_path".into(),
            message: "must not be empty".into(),
        });
    }

    let report = &config.report;
    if report.first_year > report.last_year {
        return Err(ConfigError::ValidationError {
            field: "report.first_year".into(),
            message: format!(
                "must not exceed report.last_year ({} > {})",
                report.first_year, report.last_year
            ),
        });
    }

    if report.top == Some(0) {
        return Err(ConfigError::ValidationError {
            field: "report.top".into(),
            message: "must be > 0 when set".into(),
        });
    }

    if config.logging.directory.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "logging.directory".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
