//! Fixed-width "dotted" lines: the message centered between two runs of a fill
//! pattern, e.g. `----------- Loading -----------`.

use crate::origin::Origin;
use serde::Deserialize;

/// Fully resolved layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Center the message in a fixed-width line instead of printing it as-is.
    pub dotted: bool,
    /// Target width of origin label plus dotted line, in characters.
    pub total_width: usize,
    /// Fill used on both sides unless `use_two_patterns` is set.
    pub fill_pattern: String,
    /// Use `left_pattern` / `right_pattern` instead of `fill_pattern`.
    pub use_two_patterns: bool,
    pub left_pattern: String,
    pub right_pattern: String,
    /// Printed in place of an empty message.
    pub empty_placeholder: String,
    /// Separates the message from the fill; also used as extra padding.
    pub spacer: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            dotted: false,
            total_width: 110,
            fill_pattern: "-".to_string(),
            use_two_patterns: false,
            left_pattern: "-->".to_string(),
            right_pattern: "<--".to_string(),
            empty_placeholder: "End".to_string(),
            spacer: " ".to_string(),
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with every field the patch sets replaced.
    #[must_use]
    pub fn apply(&self, patch: &FormatPatch) -> Self {
        let pick = |field: &Option<String>, current: &String| {
            field.clone().unwrap_or_else(|| current.clone())
        };
        Self {
            dotted: patch.dotted.unwrap_or(self.dotted),
            total_width: patch.total_width.unwrap_or(self.total_width),
            fill_pattern: pick(&patch.fill_pattern, &self.fill_pattern),
            use_two_patterns: patch.use_two_patterns.unwrap_or(self.use_two_patterns),
            left_pattern: pick(&patch.left_pattern, &self.left_pattern),
            right_pattern: pick(&patch.right_pattern, &self.right_pattern),
            empty_placeholder: pick(&patch.empty_placeholder, &self.empty_placeholder),
            spacer: pick(&patch.spacer, &self.spacer),
        }
    }

    /// Left and right fill units for the active pattern mode.
    fn units(&self) -> (&str, &str) {
        if self.use_two_patterns {
            (&self.left_pattern, &self.right_pattern)
        } else {
            (&self.fill_pattern, &self.fill_pattern)
        }
    }
}

/// Partial [`FormatOptions`]. Per-call options and the `[format]` config
/// section are both patches layered over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatPatch {
    pub dotted: Option<bool>,
    pub total_width: Option<usize>,
    pub fill_pattern: Option<String>,
    pub use_two_patterns: Option<bool>,
    pub left_pattern: Option<String>,
    pub right_pattern: Option<String>,
    pub empty_placeholder: Option<String>,
    pub spacer: Option<String>,
}

impl FormatPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn dotted(mut self, dotted: bool) -> Self {
        self.dotted = Some(dotted);
        self
    }

    #[must_use]
    pub const fn total_width(mut self, width: usize) -> Self {
        self.total_width = Some(width);
        self
    }

    #[must_use]
    pub fn fill_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.fill_pattern = Some(pattern.into());
        self
    }

    /// Switches to distinct left/right fills.
    #[must_use]
    pub fn two_patterns(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.use_two_patterns = Some(true);
        self.left_pattern = Some(left.into());
        self.right_pattern = Some(right.into());
        self
    }

    #[must_use]
    pub fn empty_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn spacer(mut self, spacer: impl Into<String>) -> Self {
        self.spacer = Some(spacer.into());
        self
    }

    /// `other` wins wherever it sets a field.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            dotted: other.dotted.or(self.dotted),
            total_width: other.total_width.or(self.total_width),
            fill_pattern: other.fill_pattern.clone().or_else(|| self.fill_pattern.clone()),
            use_two_patterns: other.use_two_patterns.or(self.use_two_patterns),
            left_pattern: other.left_pattern.clone().or_else(|| self.left_pattern.clone()),
            right_pattern: other.right_pattern.clone().or_else(|| self.right_pattern.clone()),
            empty_placeholder: other
                .empty_placeholder
                .clone()
                .or_else(|| self.empty_placeholder.clone()),
            spacer: other.spacer.clone().or_else(|| self.spacer.clone()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Character count as a signed width so the layout arithmetic can go negative.
fn width(s: &str) -> i64 {
    i64::try_from(s.chars().count()).unwrap_or(i64::MAX)
}

/// Negative counts repeat nothing.
fn repeat(unit: &str, count: i64) -> String {
    unit.repeat(usize::try_from(count).unwrap_or(0))
}

/// Whole repeats of `unit` that fit in `space`; zero for empty units or negative space.
fn fit(space: i64, unit: &str) -> i64 {
    let unit_width = width(unit);
    if unit_width == 0 || space <= 0 {
        return 0;
    }
    space / 2 / unit_width
}

/// Centers `message` between fill runs so that `origin_label` followed by the
/// returned line spans `options.total_width` characters.
///
/// The width is exact for single-character fills and spacers with enough room;
/// longer units leave a remainder that is padded with spacers, and lines that
/// don't fit at all get no fill.
#[must_use]
pub fn dotted(message: &str, origin_label: &str, options: &FormatOptions) -> String {
    let message = if message.is_empty() {
        options.empty_placeholder.as_str()
    } else {
        message
    };
    let spacer = options.spacer.as_str();
    let wrapped = format!("{spacer}{message}{spacer}");

    let total = i64::try_from(options.total_width).unwrap_or(i64::MAX);
    let origin_width = width(origin_label);
    let available = total
        .saturating_sub(origin_width)
        .saturating_sub(width(&wrapped));

    let (left_unit, right_unit) = options.units();
    let left_count = fit(available, left_unit);
    let right_count = fit(available, right_unit);

    let real = left_count * width(left_unit)
        + width(&wrapped)
        + right_count * width(right_unit)
        + origin_width;
    let offset = total.saturating_sub(real).max(0);

    let mut line = repeat(left_unit, left_count);
    line.push_str(&repeat(spacer, offset - offset / 2));
    line.push_str(&wrapped);
    line.push_str(&repeat(spacer, offset / 2));
    line.push_str(&repeat(right_unit, right_count));
    line
}

/// Applies the layout chosen in `options`: a dotted line when `dotted` is set,
/// otherwise the message unchanged.
#[must_use]
pub fn format(message: &str, origin: Option<&Origin>, options: &FormatOptions) -> String {
    if !options.dotted {
        return message.to_string();
    }
    let label = origin.map(Origin::label).unwrap_or_default();
    dotted(message, &label, options)
}
