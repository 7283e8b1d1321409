//! File-based logger configuration (YAML or JSON)
//!
//! ```yaml
//! level: debug
//! output:
//!   kind: file
//!   path: /var/log/service.log
//! fields:
//!   service: billing
//!   region: eu-west-1
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;
use crate::fields::Fields;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, FileSink, NoOpSink, SharedSink};

/// Where built loggers write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
    Discard,
    File { path: PathBuf },
}

impl Output {
    /// Open the sink this output names
    pub fn open(&self) -> ConfigResult<SharedSink> {
        let sink: SharedSink = match self {
            Output::Stderr => Arc::new(ConsoleSink::stderr()),
            Output::Stdout => Arc::new(ConsoleSink::stdout()),
            Output::Discard => Arc::new(NoOpSink::new()),
            Output::File { path } => Arc::new(FileSink::open(path)?),
        };
        Ok(sink)
    }
}

/// How to build the process-wide logger
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Reported severity (defaults to info)
    pub level: Severity,
    /// Destination (defaults to stderr)
    pub output: Output,
    /// Fields attached to every line
    pub fields: Fields,
}

impl LoggerConfig {
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from `path`; `.json` files are read as JSON, anything else as YAML
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    /// User-level config file (`~/.config/kvlog/config.yaml` on Linux)
    pub fn user_config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("kvlog").join("config.yaml")
    }

    /// Serialize as YAML
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Open the output and build the logger
    pub fn build(&self) -> ConfigResult<Logger> {
        let sink = self.output.open()?;
        Ok(Logger::new(sink, self.level, self.fields.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::fields::FieldValue;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, Severity::Info);
        assert_eq!(config.output, Output::Stderr);
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "
level: debug
output:
  kind: stdout
fields:
  service: billing
  shard: 7
";
        let config = LoggerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.level, Severity::Debug);
        assert_eq!(config.output, Output::Stdout);
        assert_eq!(config.fields.get("shard"), Some(&FieldValue::Int(7)));
        assert_eq!(config.fields.render(), "service=billing shard=7 ");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = LoggerConfig::from_yaml_str("level: warn\n").unwrap();
        assert_eq!(config.level, Severity::Warn);
        assert_eq!(config.output, Output::Stderr);

        assert_eq!(LoggerConfig::from_yaml_str("").unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_invalid_yaml_level() {
        let err = LoggerConfig::from_yaml_str("level: loud\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"level":"error","output":{"kind":"discard"},"fields":{"name":"john doe","age":18}}"#;
        let config = LoggerConfig::from_json_str(json).unwrap();
        assert_eq!(config.level, Severity::Error);
        assert_eq!(config.output, Output::Discard);
        assert_eq!(config.fields.render(), "age=18 name=john doe ");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("config.yaml");
        fs::write(&yaml_path, "level: fatal\n").unwrap();
        assert_eq!(LoggerConfig::load(&yaml_path).unwrap().level, Severity::Fatal);

        let json_path = dir.path().join("config.json");
        fs::write(&json_path, r#"{"level":"panic"}"#).unwrap();
        assert_eq!(LoggerConfig::load(&json_path).unwrap().level, Severity::Panic);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = LoggerConfig {
            level: Severity::Warn,
            output: Output::File {
                path: PathBuf::from("/tmp/service.log"),
            },
            fields: Fields::new().with("service", "billing"),
        };
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(LoggerConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_build_file_logger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("service.log");
        let config = LoggerConfig {
            level: Severity::Debug,
            output: Output::File { path: path.clone() },
            fields: Fields::new().with("service", "billing"),
        };

        let logger = config.build().unwrap();
        assert_eq!(logger.level(), Severity::Debug);
        logger.warn("disk almost full");
        logger.sub([("disk", "/dev/sda1")]).error("disk full");

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("WRN service=billing disk almost full"));
        assert!(lines[1].ends_with("ERR disk=/dev/sda1 service=billing disk full"));
    }

    #[test]
    fn test_build_fails_for_unopenable_file() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig {
            output: Output::File {
                path: dir.path().join("missing").join("service.log"),
            },
            ..LoggerConfig::default()
        };
        assert!(matches!(config.build(), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_user_config_path() {
        let path = LoggerConfig::user_config_path();
        assert!(path.ends_with("kvlog/config.yaml"));
    }
}
