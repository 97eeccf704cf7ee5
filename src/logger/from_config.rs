//! Logger construction from a loaded [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl Logger {
    /// Builds a console logger with the config's mask, gate, prefix and layout defaults.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when `general.level` doesn't parse.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Ok(Self::builder_from_config(config)?.build())
    }

    /// Same as [`from_config`](Self::from_config) but leaves the builder open,
    /// e.g. to swap the sink.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] when `general.level` doesn't parse.
    pub fn builder_from_config(config: &Config) -> Result<LoggerBuilder, crate::Error> {
        let prefix = config.prefix_style();
        let mut builder = LoggerBuilder::new()
            .level(config.level_mask()?)
            .gate(config.gate())
            .colors(prefix.colors)
            .format_patch(&config.format);

        builder = match prefix.timestamp_format {
            Some(format) => builder.timestamp_format(format),
            None => builder.no_timestamps(),
        };
        Ok(builder)
    }
}
