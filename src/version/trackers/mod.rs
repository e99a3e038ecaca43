//! Concrete release-record sources

pub mod jira;

pub use jira::JiraReleases;
