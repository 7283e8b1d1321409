//! Pre-seeded line writer
//!
//! A [`LineWriter`] is bound to one sink and one fixed prefix. Each call to
//! [`LineWriter::output`] produces exactly one line:
//!
//! ```text
//! 2024/01/31 23:59:59.123456 main.rs:42: INF age=18 name=john doe hello world
//! ```

use std::fmt::Write as _;
use std::io;
use std::panic::Location;

use chrono::{DateTime, Utc};

use crate::severity::Severity;
use crate::sink::SharedSink;

/// `YYYY/MM/DD HH:MM:SS.ffffff`, always UTC
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Writes lines carrying a timestamp, the call site and a fixed prefix
#[derive(Clone)]
pub(crate) struct LineWriter {
    sink: SharedSink,
    prefix: String,
}

impl LineWriter {
    /// Bind a writer for `severity`; the prefix is `"<TAG> <field line>"`
    pub(crate) fn new(sink: SharedSink, severity: Severity, field_line: &str) -> Self {
        Self {
            sink,
            prefix: format!("{} {}", severity.tag(), field_line),
        }
    }

    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Write `message` as one line attributed to `location`
    pub(crate) fn output(&self, location: &Location<'_>, message: &str) -> io::Result<()> {
        self.output_at(Utc::now(), location, message)
    }

    pub(crate) fn output_at(
        &self,
        now: DateTime<Utc>,
        location: &Location<'_>,
        message: &str,
    ) -> io::Result<()> {
        let line = self.format_line(now, location, message);
        self.sink.write_line(line.as_bytes())
    }

    fn format_line(&self, now: DateTime<Utc>, location: &Location<'_>, message: &str) -> String {
        let mut line = String::with_capacity(40 + self.prefix.len() + message.len());
        let _ = write!(
            line,
            "{} {}:{}: ",
            now.format(TIMESTAMP_FORMAT),
            base_name(location.file()),
            location.line()
        );
        line.push_str(&self.prefix);
        line.push_str(message);
        if !message.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl std::fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Last path component, for either separator style
fn base_name(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}
