//! Parsers for package manager output and version strings
//!
//! This module provides:
//! - cargo-outdated JSON output parsing
//! - `go list -u -m all` line parsing
//! - Best-effort version parsing and change classification

mod cargo_outdated;
mod go_list;
mod version;

pub use cargo_outdated::{parse_outdated, OutdatedEntry};
pub use go_list::{parse_go_list, parse_module_line, GoListOutput, ModuleLine};
pub use version::{classify, parse_version, VersionTriple};
