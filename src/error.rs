//! Unified error type for all dotlog operations.

use std::path::PathBuf;

/// Error type for dotlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a sink or while reading config.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory could not be determined.
    ConfigDirNotFound,
    /// Config file given explicitly but missing.
    ConfigNotFound(PathBuf),
    /// A `source = "..."` include leads back to a file already being loaded.
    CyclicInclude(PathBuf),
    /// Serialization error in a structured sink.
    Format(String),
    /// `stop_timer` was called for an id that was never started.
    UnknownTimer(String),
    /// Level name or mask expression that doesn't parse.
    InvalidLevel(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::ConfigNotFound(p) => write!(f, "config file not found: {}", p.display()),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::UnknownTimer(id) => write!(f, "unknown timer id: {id}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(format!("JSON serialization failed: {e}"))
    }
}
