//! Where finished lines go. The console is the default; hosts that embed the
//! logger install their own [`Sink`] as a port and receive entries instead.

mod console;
mod json;
mod memory;
mod writer;

pub use console::ConsoleSink;
pub use json::JsonSink;
pub use memory::MemorySink;
pub use writer::WriterSink;

use crate::level::Level;
use crate::origin::Origin;
use chrono::{DateTime, Local};
use serde::Serialize;

/// One fully formatted log call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub level: Level,
    /// When the call was made, not when the entry reached a sink.
    pub time: DateTime<Local>,
    /// Timestamp, level tag and origin label, possibly with ANSI codes.
    pub prefix: String,
    /// Message after layout (dotted or as given).
    pub message: String,
    pub origin: Option<Origin>,
    /// Additional values printed after the message, in call order.
    pub extras: Vec<String>,
}

impl Entry {
    /// Prefix, message and extras separated by single spaces, the way a
    /// console prints several arguments.
    #[must_use]
    pub fn line(&self) -> String {
        let mut line = String::with_capacity(self.prefix.len() + self.message.len() + 1);
        line.push_str(&self.prefix);
        line.push(' ');
        line.push_str(&self.message);
        for extra in &self.extras {
            line.push(' ');
            line.push_str(extra);
        }
        line
    }
}

/// `Send + Sync` so a logger holding a sink can be shared with timer threads.
pub trait Sink: Send + Sync {
    /// # Errors
    /// I/O or serialization errors from the underlying destination.
    fn write(&self, entry: &Entry) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    fn write(&self, entry: &Entry) -> Result<(), crate::Error> {
        (**self).write(entry)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
