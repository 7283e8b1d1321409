//! Logger configuration
//!
//! Describes how the process-wide logger is built:
//! - `LoggerConfig`: severity, output and initial fields (YAML or JSON file)
//! - environment overrides (`KVLOG_LEVEL`)

mod error;
mod env;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use env::LEVEL_ENV;
pub use file::{LoggerConfig, Output};
