//! Jira REST API release source

use crate::fetch::{FetchClient, FetchError};
use crate::version::tracker::{ReleaseRecord, ReleaseSource};

/// Release source backed by Jira's project versions endpoint
/// (`/rest/api/2/project/{key}/versions`).
pub struct JiraReleases {
    client: FetchClient,
}

impl JiraReleases {
    /// The client must be rooted at the API base, i.e. `{host}/rest/api/2`.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ReleaseSource for JiraReleases {
    async fn fetch_releases(&self, project: &str) -> Result<Vec<ReleaseRecord>, FetchError> {
        self.client
            .get_json(&format!("project/{}/versions", project))
            .await
    }
}
