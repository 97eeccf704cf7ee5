//! Severity levels as single bits, the masks built from them, and the gate that
//! decides whether a mask lets a level through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Each level owns exactly one bit so callers can enable any combination.
///
/// `Ord` follows severity, which the cumulative gate relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// High-volume instrumentation.
    Trace = 1 << 1,
    /// Diagnostics for development.
    Debug = 1 << 2,
    /// Reminders about unfinished work that should stand out in the output.
    Todo = 1 << 3,
    /// Normal operational milestones.
    Info = 1 << 4,
    /// Non-fatal anomalies.
    Warn = 1 << 5,
    /// Failures.
    Error = 1 << 6,
}

impl Level {
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Todo => "todo",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// All levels in ascending severity.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Todo,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }

    /// This level's bit plus the bits of every less severe level.
    #[must_use]
    pub const fn with_lower(self) -> LevelMask {
        // Bits start at 1 << 1, so everything from bit 1 up to our own bit.
        LevelMask((self.bit() << 1).wrapping_sub(2))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` on [`Level`] and [`LevelMask`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The offending input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "todo" => Ok(Self::Todo),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Union of level bits. Any combination is valid; there is no implied ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelMask(u8);

impl LevelMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(
        Level::Trace.bit()
            | Level::Debug.bit()
            | Level::Todo.bit()
            | Level::Info.bit()
            | Level::Warn.bit()
            | Level::Error.bit(),
    );

    /// Bits outside the six level bits are dropped.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, level: Level) -> bool {
        self.0 & level.bit() != 0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Levels whose bit is set, in ascending severity.
    pub fn levels(self) -> impl Iterator<Item = Level> {
        Level::all().into_iter().filter(move |l| self.contains(*l))
    }
}

impl From<Level> for LevelMask {
    fn from(level: Level) -> Self {
        Self(level.bit())
    }
}

impl FromIterator<Level> for LevelMask {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |mask, level| mask | level)
    }
}

impl BitOr for Level {
    type Output = LevelMask;

    fn bitor(self, rhs: Self) -> LevelMask {
        LevelMask(self.bit() | rhs.bit())
    }
}

impl BitOr<Level> for LevelMask {
    type Output = Self;

    fn bitor(self, rhs: Level) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOr for LevelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign<Level> for LevelMask {
    fn bitor_assign(&mut self, rhs: Level) {
        self.0 |= rhs.bit();
    }
}

impl fmt::Display for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.levels().map(Level::as_str).collect();
        f.write_str(&names.join("|"))
    }
}

/// Accepts `all`, `none`, a raw number, or level names joined by `|`, `,` or whitespace.
impl FromStr for LevelMask {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "all" => return Ok(Self::ALL),
            "none" | "" => return Ok(Self::NONE),
            _ => {}
        }
        if let Ok(bits) = trimmed.parse::<u8>() {
            return Ok(Self::from_bits(bits));
        }

        trimmed
            .split(|c: char| c == '|' || c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<Level>().map_err(|_| ParseLevelError(s.to_string())))
            .collect()
    }
}

/// How a mask is checked against the level of an incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// A level passes only when its own bit is set.
    #[default]
    Exact,
    /// A level passes when its own bit or the bit of any less severe level is set.
    Cumulative,
}

impl Gate {
    #[must_use]
    pub const fn permits(self, mask: LevelMask, level: Level) -> bool {
        match self {
            Self::Exact => mask.contains(level),
            Self::Cumulative => mask.intersects(level.with_lower()),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Cumulative => "cumulative",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gate {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "cumulative" => Ok(Self::Cumulative),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
