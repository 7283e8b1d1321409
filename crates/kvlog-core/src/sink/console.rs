//! Console sink implementation

use std::io::{self, Write};

use super::traits::Sink;

/// Which standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stderr,
    Stdout,
}

/// A sink that writes to stderr or stdout
///
/// Each line is written while holding the stream lock, so lines from
/// concurrent writers never interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    /// Console sink writing to standard error
    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    /// Console sink writing to standard output
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self.stream {
            ConsoleStream::Stderr => io::stderr().lock().write_all(line),
            ConsoleStream::Stdout => io::stdout().lock().write_all(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_creation() {
        assert_eq!(ConsoleSink::stderr().stream(), ConsoleStream::Stderr);
        assert_eq!(ConsoleSink::stdout().stream(), ConsoleStream::Stdout);
        assert_eq!(ConsoleSink::default().stream(), ConsoleStream::Stderr);
    }

    #[test]
    fn test_console_sink_writes() {
        // Only checks that writing to the real streams succeeds
        assert!(ConsoleSink::stderr().write_line(b"console sink test\n").is_ok());
        assert!(ConsoleSink::stdout().write_line(b"console sink test\n").is_ok());
    }
}
