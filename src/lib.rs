//! deps-analyze - Multi-ecosystem dependency freshness library
//!
//! This library provides the core functionality for reporting outdated
//! dependencies across the package ecosystems of a project:
//! - Rust (Cargo.toml, via cargo-outdated)
//! - Go (go.mod, via go list)

pub mod analyzer;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod probe;
pub mod progress;
pub mod runner;
