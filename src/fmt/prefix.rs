//! Line prefix: `17 Oct 14:30:00 - [Info]    worker:`.

use super::color::{ColorCode, colorize, colorize_with};
use crate::level::Level;
use crate::origin::Origin;
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Day, abbreviated month, wall-clock time.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d %b %H:%M:%S";

/// Tags are padded to the width of `[Warning]` so messages line up.
const TAG_WIDTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixStyle {
    pub colors: bool,
    /// strftime format; `None` leaves the timestamp out.
    pub timestamp_format: Option<String>,
}

impl Default for PrefixStyle {
    fn default() -> Self {
        Self {
            colors: true,
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
        }
    }
}

impl PrefixStyle {
    #[must_use]
    pub fn render(&self, level: Level, origin: Option<&Origin>) -> String {
        self.render_at(level, origin, Local::now())
    }

    /// Same as [`render`](Self::render) with a fixed clock.
    #[must_use]
    pub fn render_at(&self, level: Level, origin: Option<&Origin>, now: DateTime<Local>) -> String {
        let mut prefix = String::new();

        if let Some(fmt) = &self.timestamp_format {
            let mut stamp = String::new();
            // chrono reports unknown specifiers as a fmt error
            if write!(stamp, "{}", now.format(fmt)).is_err() {
                stamp.clear();
                let _ = write!(stamp, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
            }
            prefix.push_str(&stamp);
            prefix.push_str(" - ");
        }

        prefix.push_str(&level_tag(level, self.colors));

        if let Some(label) = origin.map(Origin::label)
            && !label.is_empty()
        {
            prefix.push(' ');
            prefix.push_str(&label);
        }

        prefix
    }
}

/// Bracketed level name padded to a common width. TODO, Warning and Error are
/// highlighted when `colors` is set; padding stays outside the escape codes.
#[must_use]
pub fn level_tag(level: Level, colors: bool) -> String {
    let name = match level {
        Level::Trace => "Trace",
        Level::Debug => "Debug",
        Level::Todo => "TODO",
        Level::Info => "Info",
        Level::Warn => "Warning",
        Level::Error => "Error",
    };
    let padding = " ".repeat(TAG_WIDTH.saturating_sub(name.len() + 2));

    let styled = if colors {
        match level {
            Level::Todo => colorize_with(name, &[ColorCode::FgBlack, ColorCode::BgCyan]),
            Level::Warn => colorize(name, ColorCode::FgYellow),
            Level::Error => colorize_with(name, &[ColorCode::FgBlack, ColorCode::BgRed]),
            Level::Trace | Level::Debug | Level::Info => name.to_string(),
        }
    } else {
        name.to_string()
    };

    format!("[{styled}]{padding}")
}
