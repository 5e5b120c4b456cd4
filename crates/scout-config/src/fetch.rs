//! Page fetch configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    12
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

const fn default_follow_careers() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Per-request timeout for target and my-company pages.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every page request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to follow the first careers/jobs link on the target page.
    #[serde(default = "default_follow_careers")]
    pub follow_careers: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            follow_careers: default_follow_careers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert!(config.follow_careers);
    }
}
