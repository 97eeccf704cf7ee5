//! Serde schema of the config file. Every field is optional so that included
//! files can be layered without defaults masking what the including file set.

use crate::level::Gate;
use serde::Deserialize;

/// `[general]`: filtering and prefix settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Mask expression such as `"warn|error"`, `"all"` or `"12"`.
    pub level: Option<String>,
    pub gate: Option<Gate>,
    pub colors: Option<bool>,
    /// strftime format; an empty string turns timestamps off.
    pub timestamp_format: Option<String>,
}

impl GeneralConfig {
    /// `other` wins wherever it sets a field.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            level: other.level.clone().or_else(|| self.level.clone()),
            gate: other.gate.or(self.gate),
            colors: other.colors.or(self.colors),
            timestamp_format: other
                .timestamp_format
                .clone()
                .or_else(|| self.timestamp_format.clone()),
        }
    }
}
