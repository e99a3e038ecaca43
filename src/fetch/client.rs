//! reqwest wrapper with base URL, credential and timeout baked in

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::auth::Credential;
use crate::fetch::error::FetchError;

/// HTTP client shared by every concurrent fetch within a cycle.
///
/// Cloning is cheap; the underlying connection pool is shared and the
/// configuration (base URL, credential, timeout) is immutable.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: String,
    credential: Option<Credential>,
}

impl FetchClient {
    /// Creates a client rooted at `base_url` (the tracker API root).
    ///
    /// Requests default to `Accept: application/json` and time out after
    /// `timeout_ms` milliseconds, surfacing as a transport error.
    pub fn new(base_url: &str, credential: Option<Credential>, timeout_ms: u64) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            client: reqwest::Client::builder()
                .user_agent("server-versions")
                .timeout(Duration::from_millis(timeout_ms))
                .default_headers(headers)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }

    /// GET `{base_url}/{resource}` with the credential attached,
    /// decoding the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, resource.trim_start_matches('/'));
        let request = self.authorize(self.client.get(&url));

        let response = Self::check_status(&url, request.send().await?).await?;

        response.json::<T>().await.map_err(|e| {
            warn!("Failed to decode JSON from {}: {}", url, e);
            FetchError::Decode(e.to_string())
        })
    }

    /// GET an absolute URL, returning the raw body text.
    ///
    /// Live-version endpoints are public in the systems this polls, so
    /// no credential is attached here.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = Self::check_status(url, self.client.get(url).send().await?).await?;
        Ok(response.text().await?)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credential {
            Some(Credential::Basic { username, password }) => {
                request.basic_auth(username, Some(password))
            }
            Some(Credential::Bearer(token)) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(response);
        }

        warn!("Request to {} returned status {}", url, status);

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string()
            });

        Err(FetchError::Status { status, message })
    }
}
