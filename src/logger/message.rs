//! A single log call's payload. Plain strings convert into a [`Message`] so the
//! common case stays `logger.info("text")`.

use crate::fmt::FormatPatch;
use crate::origin::Origin;
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub(crate) text: String,
    pub(crate) origin: Option<Origin>,
    pub(crate) options: FormatPatch,
    pub(crate) silent: bool,
    pub(crate) extras: Vec<String>,
}

impl Message {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn origin(mut self, origin: impl Into<Origin>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Layout overrides for this call only, merged over the logger defaults.
    #[must_use]
    pub fn options(mut self, options: FormatPatch) -> Self {
        self.options = self.options.merge(&options);
        self
    }

    /// Shorthand for `options(FormatPatch::new().dotted(true))`.
    #[must_use]
    pub fn dotted(mut self) -> Self {
        self.options.dotted = Some(true);
        self
    }

    /// Buffer this entry even when silent recording is off.
    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Appends a value printed after the message.
    #[must_use]
    pub fn arg(mut self, value: impl Display) -> Self {
        self.extras.push(value.to_string());
        self
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self::new(text.as_str())
    }
}
