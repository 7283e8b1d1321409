//! Sink adapter for any `io::Write`

use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::Sink;

/// Wraps an arbitrary writer so it can be shared as a [`Sink`]
///
/// Writes are serialised through a mutex. The writer is never flushed by the
/// logger; call [`WriterSink::into_inner`] to take it back and flush it.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.writer.lock().write_all(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    #[test]
    fn test_writer_sink_round_trip() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line(b"one\n").unwrap();
        sink.write_line(b"two\n").unwrap();
        assert_eq!(sink.into_inner(), b"one\ntwo\n");
    }

    #[test]
    fn test_writer_sink_buffered_writer() {
        let sink = WriterSink::new(BufWriter::new(Vec::new()));
        sink.write_line(b"buffered\n").unwrap();

        let buffered = sink.into_inner();
        assert_eq!(buffered.into_inner().unwrap(), b"buffered\n");
    }
}
