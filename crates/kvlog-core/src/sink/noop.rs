//! No-op sink implementation

use std::io;

use super::traits::Sink;

/// A sink that discards every line
///
/// Useful for benchmarks or when output is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn write_line(&self, _line: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();
        assert!(sink.write_line(b"dropped\n").is_ok());
    }
}
