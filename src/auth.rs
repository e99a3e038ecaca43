//! Credential lookup for authenticated tracker requests

use std::collections::HashMap;

/// Authentication material attached to outgoing tracker requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Basic { username: String, password: String },
    Bearer(String),
}

/// Maps a configuration key to authentication material.
///
/// Looked up once when the poller is constructed, never per request.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Credential>;
}

/// Credential store backed by environment variables.
///
/// For a key `jira`, reads `SERVER_VERSIONS_JIRA_USERNAME` and
/// `SERVER_VERSIONS_JIRA_PASSWORD` (basic auth), falling back to
/// `SERVER_VERSIONS_JIRA_TOKEN` (bearer). Returns `None` when neither
/// pair nor token is set.
#[derive(Debug, Default)]
pub struct EnvCredentialStore;

impl EnvCredentialStore {
    fn var(key: &str, suffix: &str) -> Option<String> {
        let name = format!(
            "SERVER_VERSIONS_{}_{}",
            key.to_uppercase().replace('-', "_"),
            suffix
        );
        std::env::var(name).ok()
    }
}

impl CredentialStore for EnvCredentialStore {
    fn get(&self, key: &str) -> Option<Credential> {
        if let (Some(username), Some(password)) =
            (Self::var(key, "USERNAME"), Self::var(key, "PASSWORD"))
        {
            return Some(Credential::Basic { username, password });
        }

        Self::var(key, "TOKEN").map(Credential::Bearer)
    }
}

/// In-memory credential store for tests and embedding hosts
#[derive(Debug, Default)]
pub struct StaticCredentialStore {
    credentials: HashMap<String, Credential>,
}

impl StaticCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(mut self, key: &str, credential: Credential) -> Self {
        self.credentials.insert(key.to_string(), credential);
        self
    }
}

impl CredentialStore for StaticCredentialStore {
    fn get(&self, key: &str) -> Option<Credential> {
        self.credentials.get(key).cloned()
    }
}
