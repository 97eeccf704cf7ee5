//! JSON lines for machine consumers. The prefix is left out because its
//! timestamp and tag are carried as separate fields without ANSI codes.

use super::{Entry, Sink};
use crate::level::Level;
use serde::Serialize;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    /// RFC 3339, local offset.
    ts: String,
    level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
    msg: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extras: Vec<String>,
}

impl<'a> From<&'a Entry> for JsonEntry<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            ts: entry.time.to_rfc3339(),
            level: entry.level,
            origin: entry.origin.as_ref().map(ToString::to_string),
            msg: &entry.message,
            extras: entry.extras.clone(),
        }
    }
}

/// One JSON object per line into any `io::Write`.
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn write(&self, entry: &Entry) -> Result<(), crate::Error> {
        let json = serde_json::to_string(&JsonEntry::from(entry))?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{json}")?;
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
