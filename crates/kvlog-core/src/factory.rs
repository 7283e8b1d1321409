//! Logger factories
//!
//! The hosting process decides the severity once and hands the resulting
//! [`LoggerFactory`] to whatever builds loggers from initial fields.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::fields::Fields;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, SharedSink};

/// Factory function type for creating loggers from initial fields
pub type LoggerFactory = Box<dyn Fn(Fields) -> Logger + Send + Sync>;

/// Standard error handle shared by every factory-built logger
static STDERR: Lazy<SharedSink> = Lazy::new(|| Arc::new(ConsoleSink::stderr()));

/// Create a factory of loggers writing to standard error
///
/// # Example
///
/// ```
/// use kvlog_core::{factory, fields, Severity};
///
/// let create = factory::create(Severity::Info);
/// let logger = create(fields! { "name" => "john" });
/// assert_eq!(logger.level(), Severity::Info);
/// ```
pub fn create(level: Severity) -> LoggerFactory {
    create_with_sink(level, Arc::clone(&STDERR))
}

/// Create a factory of loggers writing to `sink`
pub fn create_with_sink(level: Severity, sink: SharedSink) -> LoggerFactory {
    Box::new(move |fields| Logger::new(Arc::clone(&sink), level, fields))
}
