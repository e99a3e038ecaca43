//! Version resolution and comparison layer
//!
//! # Modules
//!
//! - [`semver`]: soft-failing parse and numeric-triple ordering
//! - [`tracker`]: release-record source trait and released-max resolution
//! - [`trackers`]: concrete sources (Jira)
//! - [`collector`]: live-version collection across servers
//! - [`status`]: classification of live vs released versions
//! - [`snapshot`]: per-cycle output records

pub mod collector;
pub mod semver;
pub mod snapshot;
pub mod status;
pub mod tracker;
pub mod trackers;
