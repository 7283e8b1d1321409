//! Configuration error types

use thiserror::Error;

/// Errors that can occur while loading a configuration or building its logger
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A severity name that does not exist, with where it came from
    #[error("invalid level {value:?} in {source_name}")]
    InvalidLevel { source_name: String, value: String },
}

impl ConfigError {
    pub fn invalid_level(source_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidLevel {
            source_name: source_name.into(),
            value: value.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
