//! Error types for icon fetching

use thiserror::Error;

/// Transport-level failures.
///
/// These never surface past the content store, which renders every
/// failed fetch as cached empty content.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("unexpected status {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
