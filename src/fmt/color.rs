//! The classic 8-color SGR table. Level tags only need a handful of these, but
//! callers decorate their own messages with the rest.

use std::fmt;
use std::ops::RangeBounds;

/// One SGR escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Reset,
    Bright,
    Dim,
    Underscore,
    Blink,
    Reverse,
    Hidden,

    FgBlack,
    FgRed,
    FgGreen,
    FgYellow,
    FgBlue,
    FgMagenta,
    FgCyan,
    FgWhite,

    BgBlack,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
}

impl ColorCode {
    /// Raw escape sequence, e.g. `\x1b[31m` for [`ColorCode::FgRed`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "\x1b[0m",
            Self::Bright => "\x1b[1m",
            Self::Dim => "\x1b[2m",
            Self::Underscore => "\x1b[4m",
            Self::Blink => "\x1b[5m",
            Self::Reverse => "\x1b[7m",
            Self::Hidden => "\x1b[8m",

            Self::FgBlack => "\x1b[30m",
            Self::FgRed => "\x1b[31m",
            Self::FgGreen => "\x1b[32m",
            Self::FgYellow => "\x1b[33m",
            Self::FgBlue => "\x1b[34m",
            Self::FgMagenta => "\x1b[35m",
            Self::FgCyan => "\x1b[36m",
            Self::FgWhite => "\x1b[37m",

            Self::BgBlack => "\x1b[40m",
            Self::BgRed => "\x1b[41m",
            Self::BgGreen => "\x1b[42m",
            Self::BgYellow => "\x1b[43m",
            Self::BgBlue => "\x1b[44m",
            Self::BgMagenta => "\x1b[45m",
            Self::BgCyan => "\x1b[46m",
            Self::BgWhite => "\x1b[47m",
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps `text` in `code` and a trailing reset.
#[must_use]
pub fn colorize(text: &str, code: ColorCode) -> String {
    let reset = ColorCode::Reset;
    format!("{code}{text}{reset}")
}

/// Badge-style rendering needs foreground and background applied together.
#[must_use]
pub fn colorize_with(text: &str, codes: &[ColorCode]) -> String {
    let mut out: String = codes.iter().map(|c| c.as_str()).collect();
    out.push_str(text);
    out.push_str(ColorCode::Reset.as_str());
    out
}

/// `true` in green, `false` in red.
#[must_use]
pub fn colorize_bool(value: bool) -> String {
    let code = if value {
        ColorCode::FgGreen
    } else {
        ColorCode::FgRed
    };
    colorize(&value.to_string(), code)
}

/// Green when `value` falls inside `range`, red otherwise.
#[must_use]
pub fn colorize_in_range<R: RangeBounds<i64>>(value: i64, range: &R) -> String {
    let code = if range.contains(&value) {
        ColorCode::FgGreen
    } else {
        ColorCode::FgRed
    };
    colorize(&value.to_string(), code)
}
