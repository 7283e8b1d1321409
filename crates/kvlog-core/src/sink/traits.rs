//! Sink trait definition

use std::io;
use std::sync::Arc;

/// Destination for rendered log lines
///
/// Implementations:
/// - `ConsoleSink`: standard error or standard output
/// - `FileSink`: append-mode file
/// - `WriterSink`: any `io::Write`
/// - `MemorySink`: in-memory buffer for tests
/// - `NoOpSink`: drops everything
///
/// A logger performs exactly one `write_line` call per emitted line. Whether
/// concurrent calls interleave is up to the implementation.
pub trait Sink: Send + Sync {
    /// Write one complete line, including its trailing newline
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

/// Type alias for the shared sink handle held by loggers
pub type SharedSink = Arc<dyn Sink>;

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}
