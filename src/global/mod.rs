//! Optional process-wide logger for code that can't thread a `Logger` through.
//!
//! Nothing is installed implicitly: call [`init`] (or [`init_from_config`])
//! once at startup. Until then the free functions do nothing.

use crate::config::Config;
use crate::level::Level;
use crate::logger::{Logger, Message};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs `logger`. Only the first call takes effect; returns whether this one did.
pub fn init(logger: Logger) -> bool {
    GLOBAL.set(logger).is_ok()
}

/// Loads the config from its default location and installs a console logger
/// built from it. Does nothing if a logger is already installed.
///
/// # Errors
/// Config loading or level parsing errors.
pub fn init_from_config() -> Result<(), crate::Error> {
    if GLOBAL.get().is_some() {
        return Ok(());
    }
    let config = Config::load()?;
    init(Logger::from_config(&config)?);
    Ok(())
}

#[must_use]
pub fn get() -> Option<&'static Logger> {
    GLOBAL.get()
}

fn log(level: Level, message: impl Into<Message>) {
    if let Some(logger) = GLOBAL.get() {
        logger.log(level, message);
    }
}

pub fn trace(message: impl Into<Message>) {
    log(Level::Trace, message);
}

pub fn debug(message: impl Into<Message>) {
    log(Level::Debug, message);
}

pub fn todo(message: impl Into<Message>) {
    log(Level::Todo, message);
}

pub fn info(message: impl Into<Message>) {
    log(Level::Info, message);
}

pub fn warn(message: impl Into<Message>) {
    log(Level::Warn, message);
}

pub fn error(message: impl Into<Message>) {
    log(Level::Error, message);
}
