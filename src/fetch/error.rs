use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single fetch. No retry happens at this level;
/// the poll loop reschedules the whole cycle instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS or timeout failure
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP status other than 200. The message is taken from a JSON
    /// body's `message` field when one is present, otherwise from the
    /// status' canonical reason phrase.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Response body could not be decoded as the requested format
    #[error("invalid response body: {0}")]
    Decode(String),
}
