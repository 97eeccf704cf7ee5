//! TOML configuration: loading, `source = "..."` includes and conversion into
//! the typed settings the logger needs.

mod structs;

pub use structs::GeneralConfig;

use crate::fmt::{DEFAULT_TIMESTAMP_FORMAT, FormatPatch, PrefixStyle};
use crate::level::{Gate, LevelMask};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the default config location.
pub const CONFIG_ENV: &str = "DOTLOG_CONFIG";

/// An empty file is a valid config; every field falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    /// Layout defaults for every message.
    pub format: FormatPatch,
}

/// Pulls `source = "path"` lines out of the raw text; serde has no notion of
/// includes. Returns the paths and the remaining TOML.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("source")
            && let Some(value) = rest.trim_start().strip_prefix('=')
        {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Reads `$DOTLOG_CONFIG` if set, else `<config dir>/dotlog/config.toml`.
    /// A missing default file yields the defaults.
    ///
    /// # Errors
    /// Unreadable or malformed files, a missing `$DOTLOG_CONFIG` target, cyclic includes.
    pub fn load() -> Result<Self, crate::Error> {
        if let Ok(explicit) = std::env::var(CONFIG_ENV)
            && !explicit.is_empty()
        {
            let expanded = shellexpand::tilde(&explicit);
            return Self::load_from(Path::new(expanded.as_ref()));
        }

        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// # Errors
    /// Missing, unreadable or malformed files and cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Err(crate::Error::ConfigNotFound(path.to_path_buf()));
        }
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses config text without resolving includes.
    ///
    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    /// Includes are applied first, then the including file on top. Relative
    /// include paths resolve against the including file's directory; missing
    /// includes are skipped.
    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let own: Self = toml::from_str(&toml_content)?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut merged = Self::default();
        for source in sources {
            let expanded = shellexpand::tilde(&source);
            let source_path = base_dir.join(&*expanded);
            if source_path.exists() {
                let included = Self::load_with_sources(&source_path, seen)?;
                merged = merged.merge(&included);
            }
        }

        seen.remove(&canonical);
        Ok(merged.merge(&own))
    }

    /// `other` wins wherever it sets a field.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            general: self.general.merge(&other.general),
            format: self.format.merge(&other.format),
        }
    }

    /// # Errors
    /// The platform reports no config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "dotlog")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unset means every level.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] for an unparsable mask expression.
    pub fn level_mask(&self) -> Result<LevelMask, crate::Error> {
        match &self.general.level {
            Some(level) => Ok(level.parse()?),
            None => Ok(LevelMask::ALL),
        }
    }

    #[must_use]
    pub fn gate(&self) -> Gate {
        self.general.gate.unwrap_or_default()
    }

    #[must_use]
    pub fn prefix_style(&self) -> PrefixStyle {
        let timestamp_format = match &self.general.timestamp_format {
            Some(format) if format.is_empty() => None,
            Some(format) => Some(format.clone()),
            None => Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
        };
        PrefixStyle {
            colors: self.general.colors.unwrap_or(true),
            timestamp_format,
        }
    }
}
