//! Fetch error types.

use thiserror::Error;

/// A page could not be retrieved.
///
/// Carries only the requested address. The cause (DNS, TLS, timeout, status,
/// decode) is logged at `debug` by the client that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page unavailable: {url}")]
pub struct FetchUnavailable {
    pub url: String,
}

impl FetchUnavailable {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Errors raised while constructing an HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Internal failure detail, logged and then collapsed into
/// [`FetchUnavailable`] or a placeholder.
#[derive(Debug, Error)]
pub(crate) enum FetchFailure {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("non-success status {0}")]
    Status(u16),
}
