//! The contextual logger
//!
//! A [`Logger`] owns a shared sink, a configured severity, an immutable field
//! mapping and one line writer per severity, each seeded with the severity
//! tag and the rendered field line. Nothing about a logger changes after it is
//! built; [`Logger::sub`] derives a new one instead.
//!
//! The configured severity is reported by [`Logger::level`] but never used to
//! suppress output: every emission call writes exactly one line.

use std::fmt::{self, Write as _};
use std::panic::Location;
use std::sync::Arc;

use crate::fields::Fields;
use crate::line::LineWriter;
use crate::severity::Severity;
use crate::sink::SharedSink;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<Logger>;

/// Key/value context logger
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use kvlog_core::{fields, log_info, Logger, MemorySink, Severity};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(sink.clone(), Severity::Info, fields! { "name" => "john doe", "age" => 18 });
///
/// logger.info("hello world");
/// log_info!(logger, "Hi, {}", "John");
///
/// let lines = sink.lines();
/// assert!(lines[0].contains("INF age=18 name=john doe hello world"));
/// assert!(lines[1].contains("INF age=18 name=john doe Hi, John"));
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: SharedSink,
    level: Severity,
    fields: Fields,
    fields_line: String,
    writers: [LineWriter; 6],
}

impl Logger {
    /// Build a logger writing to `sink`
    ///
    /// The field line is rendered here, once, and baked into the prefix of
    /// every line writer.
    pub fn new(sink: SharedSink, level: Severity, fields: impl Into<Fields>) -> Self {
        let fields = fields.into();
        let fields_line = fields.render();
        let writers = Severity::ALL.map(|sev| LineWriter::new(Arc::clone(&sink), sev, &fields_line));

        Self {
            sink,
            level,
            fields,
            fields_line,
            writers,
        }
    }

    /// Derive a logger with additional fields
    ///
    /// The new logger shares this logger's sink and severity. When a key is
    /// present in both mappings the value already held by `self` wins, so
    /// context attached further up the call chain cannot be overwritten.
    pub fn sub(&self, fields: impl Into<Fields>) -> Logger {
        let merged = fields.into().merged_under(&self.fields);
        Logger::new(Arc::clone(&self.sink), self.level, merged)
    }

    /// Severity this logger was built with
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Whether `severity` is at or above the configured level
    ///
    /// Lets callers skip building expensive arguments. Emission methods do
    /// not consult it.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Fields attached to every line
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Rendered field line shared by every emitted line
    pub fn fields_line(&self) -> &str {
        &self.fields_line
    }

    /// Sink shared with every sub-logger
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    /// Write a DBG line with the message's `Display` form
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.output(Severity::Debug, Location::caller(), message);
    }

    /// Write a DBG line from `format_args!` output
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.output(Severity::Debug, Location::caller(), args);
    }

    /// Write a INF line with the message's `Display` form
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.output(Severity::Info, Location::caller(), message);
    }

    /// Write a INF line from `format_args!` output
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.output(Severity::Info, Location::caller(), args);
    }

    /// Write a WRN line with the message's `Display` form
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.output(Severity::Warn, Location::caller(), message);
    }

    /// Write a WRN line from `format_args!` output
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.output(Severity::Warn, Location::caller(), args);
    }

    /// Write a ERR line with the message's `Display` form
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.output(Severity::Error, Location::caller(), message);
    }

    /// Write a ERR line from `format_args!` output
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.output(Severity::Error, Location::caller(), args);
    }

    /// Write an FTL line, then exit the process with status 1
    ///
    /// Destructors of the calling code do not run.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.output(Severity::Fatal, Location::caller(), message);
        std::process::exit(1)
    }

    /// Formatted form of [`Logger::fatal`]
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.output(Severity::Fatal, Location::caller(), args);
        std::process::exit(1)
    }

    /// Write a PNC line, then unwind with the message as a `String` payload
    ///
    /// Can be caught with `std::panic::catch_unwind`.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = self.output(Severity::Panic, Location::caller(), message);
        std::panic::panic_any(message)
    }

    /// Formatted form of [`Logger::panic`]
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = self.output(Severity::Panic, Location::caller(), args);
        std::panic::panic_any(message)
    }

    /// Render and write one line; formatting and sink errors are dropped
    fn output(
        &self,
        severity: Severity,
        location: &Location<'_>,
        message: impl fmt::Display,
    ) -> String {
        let mut rendered = String::new();
        let _ = write!(rendered, "{message}");
        let message = rendered;
        let _ = self.writers[severity.index()].output(location, &message);
        message
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("fields", &self.fields)
            .field("fields_line", &self.fields_line)
            .finish()
    }
}
