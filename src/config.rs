use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default per-request timeout in milliseconds (15 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Default interval between successful cycles in milliseconds (60 seconds)
pub const DEFAULT_INTERVAL_MS: u64 = 60_000;

/// Interval before retrying after a failed cycle in milliseconds (50 seconds)
pub const RETRY_INTERVAL_MS: u64 = 50_000;

/// Default headline attached to every snapshot
pub const DEFAULT_HEADLINE: &str = "Server Versions";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Poller configuration, loaded from a JSON file supplied by the host
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the issue tracker (e.g. "https://jira.example.com")
    pub host: String,

    /// Credential key resolved through the `CredentialStore`
    #[serde(default)]
    pub auth: Option<String>,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Interval between successful cycles in milliseconds
    #[serde(default = "default_interval")]
    pub interval: u64,

    /// Headline attached to every snapshot
    #[serde(default = "default_headline")]
    pub headline: String,

    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

/// A tracked project: an issue-tracker key plus its deployed servers
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project: String,

    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

/// A deployed server instance reporting its live version as plain text
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub url: String,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_headline() -> String {
    DEFAULT_HEADLINE.to_string()
}

/// Returns the directory used for log files.
/// Uses $XDG_DATA_HOME/server-versions if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/server-versions,
/// or ./server-versions if neither is available.
pub fn log_dir() -> PathBuf {
    log_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

fn log_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("server-versions")
}
