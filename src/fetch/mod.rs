//! Configured HTTP client used by the release resolver and server collector

pub mod client;
pub mod error;

pub use client::FetchClient;
pub use error::FetchError;
