//! Classification of a server's live version against the released version

use semver::Version;

use crate::version::semver::cmp_release;

/// How a server's live version relates to its project's released version.
///
/// Exactly one variant applies per server per cycle; the `Needs*`
/// variants carry how many whole components the server lags by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Live version is ahead of the released version
    Newer,
    NeedsMajorUpdate { behind: u64 },
    NeedsMinorUpdate { behind: u64 },
    NeedsPatchUpdate { behind: u64 },
    UpToDate,
    /// Either side is absent (unreachable endpoint, unparseable body,
    /// or no released version for the project)
    Unknown,
}

impl Status {
    /// Classify `current` against `resolved`.
    ///
    /// Rules apply in order, first match wins: absence, newer, major
    /// behind, minor behind, patch behind, up to date. Major is checked
    /// before minor, so a server one minor ahead but a major behind is
    /// still a major update.
    pub fn classify(resolved: Option<&Version>, current: Option<&Version>) -> Status {
        let (Some(resolved), Some(current)) = (resolved, current) else {
            return Status::Unknown;
        };

        if cmp_release(current, resolved).is_gt() {
            Status::Newer
        } else if current.major < resolved.major {
            Status::NeedsMajorUpdate {
                behind: resolved.major - current.major,
            }
        } else if current.minor < resolved.minor {
            Status::NeedsMinorUpdate {
                behind: resolved.minor - current.minor,
            }
        } else if current.patch < resolved.patch {
            Status::NeedsPatchUpdate {
                behind: resolved.patch - current.patch,
            }
        } else {
            Status::UpToDate
        }
    }

    /// Magnitude of the lagging component; 0 unless a `Needs*` variant
    pub fn version_diff(&self) -> u64 {
        match *self {
            Status::NeedsMajorUpdate { behind }
            | Status::NeedsMinorUpdate { behind }
            | Status::NeedsPatchUpdate { behind } => behind,
            _ => 0,
        }
    }
}
