use thiserror::Error;

/// Failure modes of a country fetch.
///
/// Both variants land on the same recovery path: the caller clears its views,
/// shows one failure notification, and logs the cause. A "not found" response
/// body is not special-cased; it fails JSON decoding like any other
/// error-shaped payload and surfaces as [`FetchError::Service`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connectivity, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Malformed or error-shaped response body.
    #[error("service error: {0}")]
    Service(String),
}
