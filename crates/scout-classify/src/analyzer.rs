//! Audit orchestration: fetch both pages, then careers and news, then
//! classify.
//!
//! The analyzer only reads from the network. Recording the audit in the
//! history store is the caller's job, so a failed analysis can never leave a
//! history row behind.

use scout_core::address::{derive_name, normalize_url};
use scout_core::entities::{FetchResult, MyProfile, TargetProfile};
use scout_core::responses::Playbook;
use scout_fetch::{Fetcher, NO_NEWS_PLACEHOLDER, NewsClient};

use crate::classifier::{Classifier, Evidence};
use crate::error::AnalysisUnavailable;
use crate::playbook;

/// Result of a successful analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub target: TargetProfile,
    pub me: MyProfile,
}

impl Analysis {
    /// Render the outreach playbook for this pair of profiles.
    #[must_use]
    pub fn playbook(&self) -> Playbook {
        playbook::build(&self.target, &self.me)
    }
}

pub struct Analyzer {
    fetcher: Fetcher,
    news: Option<NewsClient>,
    classifier: Classifier,
    follow_careers: bool,
}

impl Analyzer {
    /// Analyzer that follows careers links and skips news.
    #[must_use]
    pub const fn new(fetcher: Fetcher, classifier: Classifier) -> Self {
        Self {
            fetcher,
            news: None,
            classifier,
            follow_careers: true,
        }
    }

    /// Pull headlines from `news` for every analysis.
    #[must_use]
    pub fn with_news(mut self, news: NewsClient) -> Self {
        self.news = Some(news);
        self
    }

    #[must_use]
    pub fn follow_careers(mut self, follow: bool) -> Self {
        self.follow_careers = follow;
        self
    }

    /// Run one audit of `target_input` against `my_input`.
    ///
    /// Both inputs are normalized (`https://` added when no scheme is
    /// given). The two home pages are fetched concurrently; careers and
    /// news follow concurrently once both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisUnavailable`] if either home page cannot be
    /// fetched. No partial result is produced.
    pub async fn analyze(
        &self,
        target_input: &str,
        my_input: &str,
    ) -> Result<Analysis, AnalysisUnavailable> {
        let target_url = normalize_url(target_input);
        let my_url = normalize_url(my_input);
        tracing::info!(target = %target_url, mine = %my_url, "audit started");

        let (target, mine) = tokio::join!(
            self.fetcher.fetch(&target_url),
            self.fetcher.fetch(&my_url)
        );
        let (target, mine) = match (target, mine) {
            (Ok(target), Ok(mine)) => (target, mine),
            (target, mine) => {
                for missing in [target.err(), mine.err()].into_iter().flatten() {
                    tracing::info!(url = %missing.url, "mandatory page unavailable");
                }
                return Err(AnalysisUnavailable);
            }
        };

        let target_name = derive_name(&target.url);
        let (careers_text, news) =
            tokio::join!(self.careers_text(&target), self.headlines(&target_name));

        let (target, me) = self.classifier.classify(Evidence {
            target: &target,
            mine: &mine,
            careers_text: &careers_text,
            news: &news,
        });
        tracing::info!(
            target = %target.name,
            mine = %me.name,
            weakness = %target.weakness,
            "audit classified"
        );
        Ok(Analysis { target, me })
    }

    /// Visible text of the first careers link, or empty.
    async fn careers_text(&self, target: &FetchResult) -> String {
        if !self.follow_careers {
            return String::new();
        }
        let Some(link) = target.careers_link.as_deref() else {
            return String::new();
        };
        match self.fetcher.fetch(link).await {
            Ok(page) => page.visible_text,
            Err(_) => {
                tracing::debug!(link, "careers page unavailable; hiring signals skipped");
                String::new()
            }
        }
    }

    async fn headlines(&self, query: &str) -> Vec<String> {
        match &self.news {
            Some(client) => client.headlines(query).await,
            None => vec![NO_NEWS_PLACEHOLDER.to_string()],
        }
    }
}
