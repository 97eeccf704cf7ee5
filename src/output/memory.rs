//! Keeps entries in memory. Clones share the same buffer, so a caller can keep
//! one handle and give the other to a logger.

use super::{Entry, Sink};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    /// Formatted messages without prefixes.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// Complete lines as the console would print them.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(Entry::line).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, entry: &Entry) -> Result<(), crate::Error> {
        self.lock().push(entry.clone());
        Ok(())
    }
}
