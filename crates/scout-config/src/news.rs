//! Headline feed configuration.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://news.google.com/rss/search".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

/// Most headlines a single lookup may return.
pub const MAX_HEADLINES: usize = 3;

const fn default_max_headlines() -> usize {
    MAX_HEADLINES
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewsConfig {
    /// Whether audits look up headlines at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// RSS search endpoint; queried with `?q=<name>&hl=en-US&gl=US&ceid=US:en`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Titles kept per lookup, 1 to [`MAX_HEADLINES`].
    #[serde(default = "default_max_headlines")]
    pub max_headlines: usize,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            max_headlines: default_max_headlines(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = NewsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.endpoint, "https://news.google.com/rss/search");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_headlines, 3);
    }
}
