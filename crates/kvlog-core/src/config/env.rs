//! Environment overrides

use super::error::{ConfigError, ConfigResult};
use super::file::LoggerConfig;
use crate::severity::Severity;

/// Environment variable overriding the configured severity
pub const LEVEL_ENV: &str = "KVLOG_LEVEL";

impl LoggerConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(self) -> ConfigResult<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    ///
    /// Empty values are ignored. An unknown severity name is an error rather
    /// than a silent fallback.
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        if let Some(value) = lookup(LEVEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.level = value
                .parse::<Severity>()
                .map_err(|_| ConfigError::invalid_level(LEVEL_ENV, value))?;
        }
        Ok(self)
    }
}
