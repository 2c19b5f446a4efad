//! Shared HTTP response checks for the AMP client.
//!
//! 429 becomes [`AmpError::RateLimited`] (with `Retry-After` parsing), any
//! other non-success status becomes [`AmpError::Api`] carrying the body.

use crate::error::AmpError;

/// Return the response unchanged if its status is a success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AmpError> {
    if resp.status() == 429 {
        return Err(AmpError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(AmpError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
