//! cargo-outdated JSON output parser
//!
//! `cargo outdated --format json` prints one document per crate:
//!
//! ```json
//! {"crate_name":"app","dependencies":[{"name":"serde","project":"1.0.0","compat":"1.0.1","latest":"2.0.0","kind":"Normal","platform":null}]}
//! ```
//!
//! With `--workspace` there is one such document per member, so the parser
//! accepts a stream of documents and concatenates their dependency lists.

use crate::error::ParseError;
use serde::Deserialize;

/// One dependency row reported by cargo-outdated
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutdatedEntry {
    /// Crate name
    pub name: String,
    /// Version the project currently resolves
    pub project: String,
    /// Latest published version
    pub latest: String,
    /// Dependency role (`Normal`, `Development`, `Build`)
    #[serde(default)]
    pub kind: Option<String>,
}

impl OutdatedEntry {
    /// Returns true if the latest version differs from the one in use
    pub fn is_outdated(&self) -> bool {
        self.project != self.latest
    }
}

#[derive(Debug, Deserialize)]
struct OutdatedDocument {
    #[serde(default)]
    dependencies: Vec<OutdatedEntry>,
}

/// Parse cargo-outdated JSON output into its dependency entries
pub fn parse_outdated(output: &str) -> Result<Vec<OutdatedEntry>, ParseError> {
    if output.trim().is_empty() {
        return Err(ParseError::EmptyOutput);
    }

    let mut entries = Vec::new();
    for document in serde_json::Deserializer::from_str(output).into_iter::<OutdatedDocument>() {
        entries.extend(document?.dependencies);
    }

    Ok(entries)
}
