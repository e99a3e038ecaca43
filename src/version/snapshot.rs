//! Per-cycle output records, serialized in the dashboard wire shape

use semver::Version;
use serde::Serialize;

use crate::version::status::Status;

/// The full output of one polling cycle. Built fresh each cycle; the
/// previous snapshot is simply dropped.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub headline: String,
    pub projects: Vec<ProjectReport>,
}

/// One tracked project with its resolved release version
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project: String,
    /// Formatted resolved version, or null when no released version
    /// qualified this cycle
    pub version: Option<String>,
    pub servers: Vec<ServerReport>,
}

/// One server's classification for the cycle
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerReport {
    pub url: String,
    /// Formatted live version, or null when unreachable/unparseable
    pub current: Option<String>,
    pub newer: bool,
    pub needs_major_update: bool,
    pub needs_minor_update: bool,
    pub needs_patch_update: bool,
    pub version_diff: u64,
}

impl ServerReport {
    pub fn new(url: String, resolved: Option<&Version>, current: Option<&Version>) -> Self {
        let status = Status::classify(resolved, current);

        Self {
            url,
            current: current.map(Version::to_string),
            newer: matches!(status, Status::Newer),
            needs_major_update: matches!(status, Status::NeedsMajorUpdate { .. }),
            needs_minor_update: matches!(status, Status::NeedsMinorUpdate { .. }),
            needs_patch_update: matches!(status, Status::NeedsPatchUpdate { .. }),
            version_diff: status.version_diff(),
        }
    }
}
