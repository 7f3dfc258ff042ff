//! Best-effort version classification
//!
//! Handles version formats seen in cargo and go tool output:
//! - Plain semver: `1.2.3`
//! - Go style prefix: `v1.2.3`
//! - Short versions: `1.2`, `1`
//! - Pre-release/build suffixes: `3.0.0-alpha`, `1.0.0+build`
//! - Go pseudo-versions: `v0.0.0-20210101120000-abcdef123456`
//!
//! Anything after the leading digit run of a segment is ignored, so
//! `1.2.3-rc1` and `1.2.3` normalize to the same triple.

use crate::domain::ChangeType;
use regex::Regex;
use std::sync::LazyLock;

/// Normalized (major, minor, patch) triple
pub type VersionTriple = (u64, u64, u64);

static LEADING_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Parse a loosely formatted version string into a (major, minor, patch) triple
///
/// Never fails: segments without a leading digit run (or whose digits overflow)
/// become 0, and missing segments are padded with 0.
pub fn parse_version(version: &str) -> VersionTriple {
    let version = version.strip_prefix('v').unwrap_or(version);

    let mut parts = [0u64; 3];
    for (slot, segment) in parts.iter_mut().zip(version.split('.')) {
        *slot = LEADING_DIGITS_RE
            .find(segment)
            .and_then(|digits| digits.as_str().parse().ok())
            .unwrap_or(0);
    }

    (parts[0], parts[1], parts[2])
}

/// Classify the change between two versions by the first differing component
///
/// Direction is not checked: a downgrade is classified the same way as an
/// upgrade.
pub fn classify(current: &str, latest: &str) -> ChangeType {
    let (cur_major, cur_minor, cur_patch) = parse_version(current);
    let (new_major, new_minor, new_patch) = parse_version(latest);

    if cur_major != new_major {
        ChangeType::Major
    } else if cur_minor != new_minor {
        ChangeType::Minor
    } else if cur_patch != new_patch {
        ChangeType::Patch
    } else {
        ChangeType::Other
    }
}
