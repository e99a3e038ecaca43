//! Polls an issue tracker's release metadata and the live versions
//! reported by deployed servers, classifying each server as up to date,
//! ahead, or behind by major/minor/patch. One snapshot per cycle is
//! handed to a caller-supplied sink; nothing is persisted.

pub mod auth;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod poller;
pub mod version;
