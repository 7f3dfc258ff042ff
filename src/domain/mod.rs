//! Core domain models for deps-analyze
//!
//! This module contains the fundamental types used throughout the application:
//! - Ecosystem types for the probed package managers
//! - Update records and their semantic version change classification
//! - Per-ecosystem results and the aggregated report

mod ecosystem;
mod report;
mod update;

pub use ecosystem::Ecosystem;
pub use report::{EcosystemReport, EcosystemResult, Report, Summary};
pub use update::{ChangeType, UpdateRecord};
