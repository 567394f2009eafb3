//! Client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx reply. `detail` is the server's `error` field when present.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}
