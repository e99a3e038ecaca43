//! Live-version collection across every server of every project

#[cfg(test)]
use mockall::automock;

use futures::future::try_join_all;
use semver::Version;

use crate::config::ProjectConfig;
use crate::fetch::{FetchClient, FetchError};
use crate::version::semver::parse_version;

/// Trait for fetching a server's live-version endpoint
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionProbe: Send + Sync {
    /// Fetches the raw body of a live-version endpoint
    async fn fetch_version_text(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl VersionProbe for FetchClient {
    async fn fetch_version_text(&self, url: &str) -> Result<String, FetchError> {
        self.get_text(url).await
    }
}

/// Fetch and parse the live version of every server, all fetches
/// concurrent across projects.
///
/// A body that is not a valid semantic version yields `None` for that
/// server; a fetch rejection fails the whole stage, matching the
/// resolver's all-or-nothing policy. Results line up with `projects`
/// and their server lists.
pub async fn collect_versions<P: VersionProbe>(
    probe: &P,
    projects: &[ProjectConfig],
) -> Result<Vec<Vec<Option<Version>>>, FetchError> {
    try_join_all(projects.iter().map(|project| {
        try_join_all(project.servers.iter().map(|server| async move {
            let body = probe.fetch_version_text(&server.url).await?;
            Ok(parse_version(&body))
        }))
    }))
    .await
}
