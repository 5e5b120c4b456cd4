//! Market news headlines from an RSS search endpoint.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::{ClientError, FetchFailure};
use crate::http::check_response;

/// Returned in place of headlines when the feed is unreachable or empty.
pub const NO_NEWS_PLACEHOLDER: &str = "No recent market news identified.";

/// Client for an RSS search feed (Google News style query parameters).
pub struct NewsClient {
    http: reqwest::Client,
    endpoint: String,
    max_headlines: usize,
}

impl NewsClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(
        endpoint: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
        max_headlines: usize,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()?,
            endpoint: endpoint.into(),
            max_headlines,
        })
    }

    /// Feed URL for `query`.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&hl=en-US&gl=US&ceid=US:en",
            self.endpoint,
            urlencoding::encode(query)
        )
    }

    /// Up to `max_headlines` titles for `query`.
    ///
    /// Never fails: any error or an empty feed yields
    /// `[`[`NO_NEWS_PLACEHOLDER`]`]`.
    pub async fn headlines(&self, query: &str) -> Vec<String> {
        match self.try_headlines(query).await {
            Ok(titles) if !titles.is_empty() => titles,
            Ok(_) => placeholder(),
            Err(e) => {
                tracing::debug!(query, %e, "news feed unavailable");
                placeholder()
            }
        }
    }

    async fn try_headlines(&self, query: &str) -> Result<Vec<String>, FetchFailure> {
        let resp = check_response(self.http.get(self.search_url(query)).send().await?)?;
        let body = resp.text().await?;
        Ok(parse_headlines(&body, self.max_headlines))
    }
}

fn placeholder() -> Vec<String> {
    vec![NO_NEWS_PLACEHOLDER.to_string()]
}

/// Titles of the first `limit` `<item>` elements of an RSS document.
///
/// Parsed leniently with the HTML parser; CDATA wrappers are stripped and
/// blank titles skipped.
#[must_use]
pub fn parse_headlines(feed: &str, limit: usize) -> Vec<String> {
    let Ok(selector) = Selector::parse("item > title") else {
        return Vec::new();
    };
    Html::parse_document(feed)
        .select(&selector)
        .map(|title| {
            let raw = title.text().collect::<String>();
            let trimmed = raw.trim();
            trimmed
                .strip_prefix("<![CDATA[")
                .and_then(|t| t.strip_suffix("]]>"))
                .unwrap_or(trimmed)
                .trim()
                .to_string()
        })
        .filter(|title| !title.is_empty())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
<title>"Acme" - Google News</title>
<link>https://news.google.com</link>
<item><title>Acme raises Series B</title><link>https://a.example/1</link></item>
<item><title><![CDATA[Acme &amp; Partners expand]]></title></item>
<item><title>Acme opens Berlin office</title></item>
<item><title>Acme fourth story</title></item>
</channel></rss>"#;

    #[test]
    fn parse_headlines_takes_item_titles_only() {
        let titles = parse_headlines(FEED, 3);
        assert_eq!(titles.len(), 3);
        assert_eq!(titles[0], "Acme raises Series B");
        assert_eq!(titles[2], "Acme opens Berlin office");
        assert!(titles[1].starts_with("Acme "));
    }

    #[test]
    fn parse_headlines_respects_limit() {
        assert_eq!(parse_headlines(FEED, 1), vec!["Acme raises Series B"]);
    }

    #[test]
    fn parse_headlines_decodes_entities() {
        let feed = "<rss><channel><item><title>Q3 results &amp; outlook</title></item></channel></rss>";
        assert_eq!(parse_headlines(feed, 3), vec!["Q3 results & outlook"]);
    }

    #[test]
    fn parse_headlines_empty_feed() {
        assert!(parse_headlines("<rss><channel></channel></rss>", 3).is_empty());
        assert!(parse_headlines("not xml at all", 3).is_empty());
    }

    #[test]
    fn search_url_encodes_query() {
        let client = NewsClient::new(
            "https://news.example/rss/search",
            "Mozilla/5.0",
            Duration::from_secs(5),
            3,
        )
        .unwrap();
        assert_eq!(
            client.search_url("Acme Corp"),
            "https://news.example/rss/search?q=Acme%20Corp&hl=en-US&gl=US&ceid=US:en"
        );
    }
}
