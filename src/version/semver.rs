//! Soft-failing semantic version parsing and release ordering

use std::cmp::Ordering;

use semver::Version;

/// Parse a raw string into a semantic version.
///
/// Trims surrounding whitespace and accepts an optional leading `v`.
/// Anything that does not parse as `major.minor.patch` (with optional
/// pre-release/build metadata) is treated as absent, never an error.
pub fn parse_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(stripped).ok()
}

/// Order two versions by their numeric triple alone.
///
/// Pre-release and build metadata never break ties: a `1.2.3-rc.1`
/// deployment of release `1.2.3` counts as that release.
pub fn cmp_release(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch).cmp(&(b.major, b.minor, b.patch))
}
