//! Standard output, one line per entry.

use super::{Entry, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&self, entry: &Entry) -> Result<(), crate::Error> {
        writeln!(io::stdout().lock(), "{}", entry.line())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
