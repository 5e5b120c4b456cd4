use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use scout_classify::{Analyzer, Classifier};
use scout_config::ScoutConfig;
use scout_db::ScoutDb;
use scout_fetch::{Fetcher, NewsClient};

/// Shared application resources for one invocation.
///
/// The history database is opened on demand so that an audit can still
/// report its findings when the store is unavailable.
pub struct AppContext {
    pub config: ScoutConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: ScoutConfig) -> Self {
        Self { config }
    }

    /// Build an analyzer from the fetch and news settings.
    pub fn analyzer(&self, follow_careers: bool, with_news: bool) -> anyhow::Result<Analyzer> {
        let fetch = &self.config.fetch;
        let fetcher = Fetcher::new(&fetch.user_agent, Duration::from_secs(fetch.timeout_secs))
            .context("failed to build page fetcher")?;

        let mut analyzer = Analyzer::new(fetcher, Classifier::default())
            .follow_careers(follow_careers && fetch.follow_careers);

        let news = &self.config.news;
        if with_news && news.enabled {
            let client = NewsClient::new(
                news.endpoint.clone(),
                &fetch.user_agent,
                Duration::from_secs(news.timeout_secs),
                news.max_headlines,
            )
            .context("failed to build news client")?;
            analyzer = analyzer.with_news(client);
        }
        Ok(analyzer)
    }

    /// Open (creating if needed) the history database.
    pub async fn open_history(&self) -> anyhow::Result<ScoutDb> {
        let path = self.config.store.db_path.as_str();
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create history directory {}", parent.display())
            })?;
        }
        ScoutDb::open_local(path)
            .await
            .with_context(|| format!("failed to open history database at {path}"))
    }
}
