//! Plain-text lines into any `io::Write`, e.g. a file or a pipe.

use super::{Entry, Sink};
use std::io::Write;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Hands the writer back, e.g. to inspect a `Vec<u8>` in tests.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, entry: &Entry) -> Result<(), crate::Error> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", entry.line())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        Ok(())
    }
}
