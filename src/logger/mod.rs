//! The logger: level gate, layout, routing to sink or port, the silent buffer
//! and named timers. All mutable state sits behind one mutex, so a `Logger`
//! can be shared across threads (and with its own auto-stop timer).

mod builder;
mod from_config;
mod message;

pub use builder::{FormatBuilder, LoggerBuilder};
pub use message::Message;

use crate::Error;
use crate::fmt::{self, FormatOptions, PrefixStyle};
use crate::level::{Gate, Level, LevelMask};
use crate::origin::Origin;
use crate::output::{Entry, Sink};
use chrono::Local;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

struct State {
    mask: LevelMask,
    gate: Gate,
    prefix: PrefixStyle,
    defaults: FormatOptions,
    sink: Box<dyn Sink>,
    port: Option<Box<dyn Sink>>,
    silent: bool,
    buffer: Vec<Entry>,
    timers: HashMap<String, Instant>,
}

impl State {
    /// The port replaces the sink while installed.
    fn emit(&self, entry: &Entry) -> Result<(), Error> {
        match &self.port {
            Some(port) => port.write(entry),
            None => self.sink.write(entry),
        }
    }

    /// Emits the buffer in call order. Entries that fail stay out of the
    /// buffer; the first error is reported after the rest went out.
    fn drain(&mut self) -> Result<(), Error> {
        let buffered = std::mem::take(&mut self.buffer);
        let mut first_err = None;
        for entry in &buffered {
            if let Err(e) = self.emit(entry) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Sinks must not log through the logger that calls them; the state lock is
/// held while they run.
pub struct Logger {
    state: Mutex<State>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// A poisoned lock only means a sink panicked mid-write; the state itself is intact.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the enabled levels. Any union of bits is accepted.
    pub fn set_level(&self, mask: impl Into<LevelMask>) {
        self.lock().mask = mask.into();
    }

    #[must_use]
    pub fn level(&self) -> LevelMask {
        self.lock().mask
    }

    pub fn set_gate(&self, gate: Gate) {
        self.lock().gate = gate;
    }

    #[must_use]
    pub fn gate(&self) -> Gate {
        self.lock().gate
    }

    /// Whether a message at `level` would get past the gate right now.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        let state = self.lock();
        state.gate.permits(state.mask, level)
    }

    /// Routes output to a host port instead of the sink.
    pub fn set_port(&self, port: impl Sink + 'static) {
        self.lock().port = Some(Box::new(port));
    }

    pub fn clear_port(&self) {
        self.lock().port = None;
    }

    #[must_use]
    pub fn has_port(&self) -> bool {
        self.lock().port.is_some()
    }

    /// The message as it would be laid out with this logger's defaults.
    #[must_use]
    pub fn format(&self, message: &Message) -> String {
        let options = self.lock().defaults.apply(&message.options);
        fmt::format(&message.text, message.origin.as_ref(), &options)
    }

    /// Gate, format and route one message.
    ///
    /// Returns `Ok(false)` when the gate filtered it out.
    ///
    /// # Errors
    /// Propagates the sink or port error when the entry is written immediately.
    pub fn try_log(&self, level: Level, message: impl Into<Message>) -> Result<bool, Error> {
        let message = message.into();
        let mut state = self.lock();
        if !state.gate.permits(state.mask, level) {
            return Ok(false);
        }

        let options = state.defaults.apply(&message.options);
        let time = Local::now();
        let entry = Entry {
            level,
            time,
            prefix: state.prefix.render_at(level, message.origin.as_ref(), time),
            message: fmt::format(&message.text, message.origin.as_ref(), &options),
            origin: message.origin,
            extras: message.extras,
        };

        if state.silent || message.silent {
            state.buffer.push(entry);
            return Ok(true);
        }
        state.emit(&entry)?;
        Ok(true)
    }

    /// Like [`try_log`](Self::try_log), with sink errors dropped.
    pub fn log(&self, level: Level, message: impl Into<Message>) {
        let _ = self.try_log(level, message);
    }

    pub fn trace(&self, message: impl Into<Message>) {
        self.log(Level::Trace, message);
    }

    pub fn debug(&self, message: impl Into<Message>) {
        self.log(Level::Debug, message);
    }

    pub fn todo(&self, message: impl Into<Message>) {
        self.log(Level::Todo, message);
    }

    pub fn info(&self, message: impl Into<Message>) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Into<Message>) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl Into<Message>) {
        self.log(Level::Error, message);
    }

    /// Starts (or restarts) the timer named `id`.
    pub fn start_timer(&self, id: impl Into<String>) {
        self.lock().timers.insert(id.into(), Instant::now());
    }

    /// Stops the timer named `id` and returns the time since it was started.
    ///
    /// # Errors
    /// [`Error::UnknownTimer`] when no timer with that id is running.
    pub fn stop_timer(&self, id: &str) -> Result<Duration, Error> {
        self.lock()
            .timers
            .remove(id)
            .map(|started| started.elapsed())
            .ok_or_else(|| Error::UnknownTimer(id.to_string()))
    }

    /// Stops the timer and reports the measurement at debug level as
    /// `"<label> -> measured time for Id(<id>): <n>ms"`.
    ///
    /// # Errors
    /// [`Error::UnknownTimer`] when no timer with that id is running.
    pub fn stop_timer_and_log(
        &self,
        id: &str,
        label: &str,
        origin: Option<Origin>,
    ) -> Result<Duration, Error> {
        let elapsed = self.stop_timer(id)?;
        let mut message = Message::new(format!(
            "{label} -> measured time for Id({id}): {}ms",
            elapsed.as_millis()
        ));
        message.origin = origin;
        self.debug(message);
        Ok(elapsed)
    }

    /// Buffers every following entry until recording stops.
    pub fn start_silent_record(&self) {
        self.lock().silent = true;
    }

    /// Leaves silent mode and emits everything buffered so far.
    ///
    /// # Errors
    /// The first sink error hit while emitting.
    pub fn stop_silent_record(&self) -> Result<(), Error> {
        let mut state = self.lock();
        state.silent = false;
        state.drain()
    }

    /// Emits and clears the buffer without changing silent mode.
    ///
    /// # Errors
    /// The first sink error hit while emitting.
    pub fn flush_silent_records(&self) -> Result<(), Error> {
        self.lock().drain()
    }

    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.lock().silent
    }

    #[must_use]
    pub fn buffered(&self) -> usize {
        self.lock().buffer.len()
    }

    /// Records silently for `duration`, then stops recording on a background
    /// thread, which emits the buffer like [`stop_silent_record`](Self::stop_silent_record).
    /// With `print_after_run` the sink and port are flushed afterwards.
    ///
    /// Manual start/stop calls in the meantime are allowed; whichever runs
    /// last decides the silent flag. Joining the handle yields the first
    /// sink error hit while emitting.
    pub fn silent_record(
        self: &Arc<Self>,
        print_after_run: bool,
        duration: Duration,
    ) -> JoinHandle<Result<(), Error>> {
        self.start_silent_record();
        let logger = Arc::clone(self);
        thread::spawn(move || {
            thread::sleep(duration);
            logger.finish_silent_record(print_after_run)
        })
    }

    /// Async variant of [`silent_record`](Self::silent_record) for callers on a tokio runtime.
    ///
    /// # Errors
    /// The first sink error hit while emitting.
    #[cfg(feature = "tokio")]
    pub async fn silent_record_async(
        &self,
        print_after_run: bool,
        duration: Duration,
    ) -> Result<(), Error> {
        self.start_silent_record();
        tokio::time::sleep(duration).await;
        self.finish_silent_record(print_after_run)
    }

    fn finish_silent_record(&self, print_after_run: bool) -> Result<(), Error> {
        self.stop_silent_record()?;
        if print_after_run {
            self.flush()?;
        }
        Ok(())
    }

    /// # Errors
    /// I/O errors from the sink or port.
    pub fn flush(&self) -> Result<(), Error> {
        let state = self.lock();
        state.sink.flush()?;
        if let Some(port) = &state.port {
            port.flush()?;
        }
        Ok(())
    }
}
