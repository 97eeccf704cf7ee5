//! Stepwise construction of a [`Logger`]. Layout defaults get their own
//! sub-builder so the top level stays about filtering and routing.

use super::{Logger, State};
use crate::fmt::{FormatOptions, FormatPatch, PrefixStyle};
use crate::level::{Gate, LevelMask};
use crate::output::{ConsoleSink, Sink};
use std::collections::HashMap;
use std::sync::Mutex;

pub struct LoggerBuilder {
    mask: LevelMask,
    gate: Gate,
    prefix: PrefixStyle,
    defaults: FormatPatch,
    sink: Option<Box<dyn Sink>>,
    port: Option<Box<dyn Sink>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Every level enabled, exact gate, colored prefix with timestamp, console output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mask: LevelMask::ALL,
            gate: Gate::Exact,
            prefix: PrefixStyle::default(),
            defaults: FormatPatch::default(),
            sink: None,
            port: None,
        }
    }

    #[must_use]
    pub fn level(mut self, mask: impl Into<LevelMask>) -> Self {
        self.mask = mask.into();
        self
    }

    #[must_use]
    pub const fn gate(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    /// ANSI highlighting of the level tag.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.prefix.colors = enabled;
        self
    }

    /// strftime format for the prefix timestamp.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.prefix.timestamp_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn no_timestamps(mut self) -> Self {
        self.prefix.timestamp_format = None;
        self
    }

    /// Replaces the console as the default destination.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Host port that takes precedence over the sink.
    #[must_use]
    pub fn port(mut self, port: impl Sink + 'static) -> Self {
        self.port = Some(Box::new(port));
        self
    }

    /// Layout defaults applied to every message.
    #[must_use]
    pub fn format(self) -> FormatBuilder {
        FormatBuilder { parent: self }
    }

    #[must_use]
    pub fn format_patch(mut self, patch: &FormatPatch) -> Self {
        self.defaults = self.defaults.merge(patch);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            state: Mutex::new(State {
                mask: self.mask,
                gate: self.gate,
                prefix: self.prefix,
                defaults: FormatOptions::default().apply(&self.defaults),
                sink: self.sink.unwrap_or_else(|| Box::new(ConsoleSink::new())),
                port: self.port,
                silent: false,
                buffer: Vec::new(),
                timers: HashMap::new(),
            }),
        }
    }
}

/// Layout defaults; `done` returns to the parent builder.
pub struct FormatBuilder {
    parent: LoggerBuilder,
}

impl FormatBuilder {
    fn patch(mut self, patch: &FormatPatch) -> Self {
        self.parent = self.parent.format_patch(patch);
        self
    }

    #[must_use]
    pub fn dotted(self, dotted: bool) -> Self {
        self.patch(&FormatPatch::new().dotted(dotted))
    }

    #[must_use]
    pub fn total_width(self, width: usize) -> Self {
        self.patch(&FormatPatch::new().total_width(width))
    }

    #[must_use]
    pub fn fill_pattern(self, pattern: &str) -> Self {
        self.patch(&FormatPatch::new().fill_pattern(pattern))
    }

    #[must_use]
    pub fn two_patterns(self, left: &str, right: &str) -> Self {
        self.patch(&FormatPatch::new().two_patterns(left, right))
    }

    #[must_use]
    pub fn empty_placeholder(self, placeholder: &str) -> Self {
        self.patch(&FormatPatch::new().empty_placeholder(placeholder))
    }

    #[must_use]
    pub fn spacer(self, spacer: &str) -> Self {
        self.patch(&FormatPatch::new().spacer(spacer))
    }

    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent
    }
}
