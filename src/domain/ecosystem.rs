//! Ecosystem definitions for the probed package managers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package ecosystems the analyzer knows how to probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Rust ecosystem (Cargo.toml, probed with cargo-outdated)
    Rust,
    /// Go ecosystem (go.mod, probed with go list)
    Go,
}

impl Ecosystem {
    /// Returns the manifest filename for this ecosystem
    pub fn manifest_filename(&self) -> &'static str {
        match self {
            Ecosystem::Rust => "Cargo.toml",
            Ecosystem::Go => "go.mod",
        }
    }

    /// Returns the command used to list outdated dependencies, as shown in messages
    pub fn tool_name(&self) -> &'static str {
        match self {
            Ecosystem::Rust => "cargo outdated",
            Ecosystem::Go => "go list",
        }
    }

    /// Returns the display name for this ecosystem
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Rust => "Rust",
            Ecosystem::Go => "Go",
        }
    }

    /// Returns the section icon used in console output
    pub fn icon(&self) -> &'static str {
        match self {
            Ecosystem::Rust => "🦀",
            Ecosystem::Go => "🐹",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
