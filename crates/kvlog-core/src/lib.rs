//! kvlog core
//!
//! Contextual line logger. Every line carries a UTC timestamp, the call site,
//! a severity tag and the logger's fields in sorted `key=value` form:
//!
//! ```text
//! 2024/01/31 23:59:59.123456 main.rs:42: INF age=18 name=john doe hello world
//! ```
//!
//! ## Sub-loggers
//!
//! A logger never changes after it is built. [`Logger::sub`] derives a new
//! logger with extra fields; values already present on the parent win over
//! colliding keys passed to `sub`.
//!
//! ```rust
//! use std::sync::Arc;
//! use kvlog_core::{fields, Logger, MemorySink, Severity};
//!
//! let sink = Arc::new(MemorySink::new());
//! let root = Logger::new(sink.clone(), Severity::Info, fields! { "request_id" => "r-1" });
//!
//! let handler = root.sub(fields! { "request_id" => "other", "user" => "john" });
//! handler.warn("slow request");
//!
//! assert!(sink.contents().contains("WRN request_id=r-1 user=john slow request"));
//! ```
//!
//! ## Severity
//!
//! The configured severity is only reported through [`Logger::level`]; lines
//! are written for every call regardless of it.

pub mod severity;
pub mod fields;
pub mod sink;
mod line;
pub mod logger;
pub mod factory;
pub mod config;
mod macros;

// Re-export commonly used types
pub use severity::{Severity, ParseSeverityError};

pub use fields::{Fields, FieldValue};

pub use sink::{
    Sink, SharedSink,
    ConsoleSink, ConsoleStream, MemorySink, FileSink, WriterSink, NoOpSink,
};

pub use logger::{Logger, SharedLogger};

pub use factory::{create, create_with_sink, LoggerFactory};

pub use config::{LoggerConfig, Output, ConfigError, ConfigResult};

pub use macros::Sprint;
