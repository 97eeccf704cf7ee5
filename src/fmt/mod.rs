//! Everything that turns a message into text: dotted layout, the line prefix,
//! ANSI colors and elapsed-time rendering.

mod color;
mod dotted;
mod duration;
mod prefix;

pub use color::{ColorCode, colorize, colorize_bool, colorize_in_range, colorize_with};
pub use dotted::{FormatOptions, FormatPatch, dotted, format};
pub use duration::human_duration;
pub use prefix::{DEFAULT_TIMESTAMP_FORMAT, PrefixStyle, level_tag};
