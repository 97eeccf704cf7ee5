//! `dotlog` - level-filtered console logging with dotted line layout.
//!
//! - Levels are single bits; the enabled set is any union of them
//! - Messages can be centered in a fixed-width line of fill characters
//! - Silent recording buffers output until it is flushed
//! - Named timers measure elapsed time between two calls
//! - Output goes to the console, or to a host-provided port
//!
//! # Example
//!
//! ```
//! use dotlog::{Level, Logger, Message, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .level(Level::Info | Level::Warn | Level::Error)
//!     .colors(false)
//!     .no_timestamps()
//!     .sink(sink.clone())
//!     .build();
//!
//! logger.info(Message::new("Loading").origin("boot").dotted());
//! logger.debug("filtered out");
//!
//! assert_eq!(sink.len(), 1);
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `dotlog` binary
//! - `tokio`: `Logger::silent_record_async`

pub mod config;
mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod origin;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{FormatOptions, FormatPatch, dotted, format};
pub use level::{Gate, Level, LevelMask};
pub use logger::{Logger, LoggerBuilder, Message};
pub use origin::Origin;
pub use output::{ConsoleSink, Entry, JsonSink, MemorySink, Sink, WriterSink};
