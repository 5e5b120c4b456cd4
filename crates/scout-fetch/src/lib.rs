//! # scout-fetch
//!
//! HTTP retrieval for scout audits:
//! - [`Fetcher`] performs a single GET per page and extracts visible text and
//!   the careers link from the markup.
//! - [`NewsClient`] pulls a handful of market headlines from an RSS search
//!   feed.
//!
//! No retries, no rate limiting, no caching. A failed page collapses into
//! [`FetchUnavailable`]; a failed feed collapses into a placeholder headline.

pub mod extract;
pub mod news;

mod error;
mod http;

pub use error::{ClientError, FetchUnavailable};
pub use extract::{extract_page, find_careers_link, visible_text};
pub use news::{NO_NEWS_PLACEHOLDER, NewsClient, parse_headlines};

use std::time::Duration;

use scout_core::entities::FetchResult;

use crate::error::FetchFailure;
use crate::http::check_response;

/// Default per-request timeout for page fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Default User-Agent; some sites refuse requests without a browser-like one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

// ── Client ─────────────────────────────────────────────────────────

/// Page fetcher. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Fetcher {
    http: reqwest::Client,
}

impl Fetcher {
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()?,
        })
    }

    /// Fetcher with the default User-Agent and timeout.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT)
    }

    /// GET `url` once and extract its text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchUnavailable`] on any transport error, timeout,
    /// non-success status or undecodable body. The cause is logged at
    /// `debug`.
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchUnavailable> {
        match self.try_fetch(url).await {
            Ok(page) => Ok(page),
            Err(e) => {
                tracing::debug!(url, %e, "page unavailable");
                Err(FetchUnavailable::new(url))
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<FetchResult, FetchFailure> {
        let resp = check_response(self.http.get(url).send().await?)?;
        let body = resp.text().await?;
        Ok(extract_page(url, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_host_is_unavailable() {
        let fetcher = Fetcher::new(DEFAULT_USER_AGENT, Duration::from_secs(2)).unwrap();
        // Port 9 (discard) on loopback is closed in test environments.
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert_eq!(err, FetchUnavailable::new("http://127.0.0.1:9/"));
    }

    #[tokio::test]
    async fn malformed_url_is_unavailable() {
        let fetcher = Fetcher::with_defaults().unwrap();
        let err = fetcher.fetch("https://").await.unwrap_err();
        assert_eq!(err.url, "https://");
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn fetch_live_page() {
        let fetcher = Fetcher::with_defaults().unwrap();
        let page = fetcher.fetch("https://example.com").await.unwrap();
        assert!(page.visible_text.contains("example domain"));
    }
}
