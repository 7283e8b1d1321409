//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::Sink;

/// In-memory sink for tests
///
/// Collects every written byte. Share it with a logger through an `Arc` and
/// inspect the output afterwards.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use kvlog_core::{Fields, Logger, MemorySink, Severity};
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(sink.clone(), Severity::Info, Fields::new().with("name", "john"));
/// logger.info("hello");
/// assert!(sink.contents().contains("INF name=john hello"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Mutex<Vec<u8>>,
}

impl MemorySink {
    /// Create a new empty sink
    pub fn new() -> Self {
        Self {
            buf: Mutex::new(Vec::new()),
        }
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written lines without their trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        self.buf.lock().clear();
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.buf.lock().extend_from_slice(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_lines() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line(b"first\n").unwrap();
        sink.write_line(b"second\n").unwrap();

        assert_eq!(sink.contents(), "first\nsecond\n");
        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.len(), 13);
    }

    #[test]
    fn test_memory_sink_clear() {
        let sink = MemorySink::new();
        sink.write_line(b"gone\n").unwrap();
        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.contents(), "");
    }
}
