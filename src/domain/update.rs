//! Update record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic version change between a current and a latest version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Major component differs (breaking)
    Major,
    /// Minor component differs (features)
    Minor,
    /// Patch component differs (fixes)
    Patch,
    /// Equal after normalization, e.g. only a pre-release suffix differs
    Other,
    /// Could not be classified
    Unknown,
}

impl ChangeType {
    /// Returns the plain label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Major => "major",
            ChangeType::Minor => "minor",
            ChangeType::Patch => "patch",
            ChangeType::Other => "other",
            ChangeType::Unknown => "unknown",
        }
    }

    /// Returns the severity marker shown next to an update
    pub fn icon(&self) -> &'static str {
        match self {
            ChangeType::Major => "🔴",
            ChangeType::Minor => "🟡",
            ChangeType::Patch => "🟢",
            ChangeType::Other => "🔵",
            ChangeType::Unknown => "⚪",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single dependency with a newer version available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Package or module name
    pub name: String,
    /// Version currently in use
    pub current: String,
    /// Latest version reported by the tool
    pub latest: String,
    /// Classified change between `current` and `latest`
    pub change_type: ChangeType,
    /// Dependency role (cargo only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl UpdateRecord {
    /// Creates a new update record without a dependency role
    pub fn new(
        name: impl Into<String>,
        current: impl Into<String>,
        latest: impl Into<String>,
        change_type: ChangeType,
    ) -> Self {
        Self {
            name: name.into(),
            current: current.into(),
            latest: latest.into(),
            change_type,
            kind: None,
        }
    }

    /// Sets the dependency role (builder pattern)
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Returns true if this is a major version change
    pub fn is_major(&self) -> bool {
        self.change_type == ChangeType::Major
    }
}

impl fmt::Display for UpdateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.name, self.current, self.latest)
    }
}
