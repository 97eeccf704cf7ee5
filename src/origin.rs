//! Identifies where a message came from. Rendered into the line prefix as `label:`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Origin {
    /// Free-form label such as a module or component name.
    Label(String),
    /// A named instance, e.g. one of several workers of the same kind.
    Named { name: String, id: String },
}

impl Origin {
    #[must_use]
    pub fn named(name: impl Into<String>, id: impl ToString) -> Self {
        Self::Named {
            name: name.into(),
            id: id.to_string(),
        }
    }

    /// Bare name without the trailing colon.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Label(label) => label,
            Self::Named { name, .. } => name,
        }
    }

    /// Prefix form: `worker:` or `worker#3:`. Empty labels render as nothing.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Label(label) if label.is_empty() => String::new(),
            Self::Label(label) => format!("{label}:"),
            Self::Named { name, id } => format!("{name}#{id}:"),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::Named { name, id } => write!(f, "{name}#{id}"),
        }
    }
}

impl From<&str> for Origin {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for Origin {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}
