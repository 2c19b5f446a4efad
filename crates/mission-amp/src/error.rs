//! AMP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the AMP event API.
#[derive(Debug, Error)]
pub enum AmpError {
    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by AMP.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The API returned 429 Too Many Requests. Not retried.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds AMP asked us to wait.
        retry_after_secs: u64,
    },

    /// The response body was not an event list.
    #[error("parse error: {0}")]
    Parse(String),
}
