//! Byte sinks that receive rendered log lines
//!
//! Every sink takes `&self` for writes so a single instance can be shared by a
//! logger, its line writers and all of its sub-loggers behind one `Arc`.

mod traits;
mod console;
mod memory;
mod file;
mod writer;
mod noop;

pub use traits::{Sink, SharedSink};
pub use console::{ConsoleSink, ConsoleStream};
pub use memory::MemorySink;
pub use file::FileSink;
pub use writer::WriterSink;
pub use noop::NoOpSink;
