//! Pure keyword classification over fetched pages.

use std::borrow::Cow;

use scout_core::address::derive_name;
use scout_core::entities::{DEFAULT_LOCATION, FetchResult, MyProfile, TargetProfile};
use scout_core::enums::{HiringIntensity, LegalFramework};

use crate::matrices::{KeywordMatrices, WeaknessSignal};

/// Everything gathered for one audit, ready to classify.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    /// Target home page; `url` is the normalized target address.
    pub target: &'a FetchResult,
    /// Operator home page; `url` is the normalized operator address.
    pub mine: &'a FetchResult,
    /// Visible text of the careers page, empty if none was fetched.
    pub careers_text: &'a str,
    pub news: &'a [String],
}

/// Applies a [`KeywordMatrices`] to page text. Holds no other state.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    matrices: KeywordMatrices,
}

impl Classifier {
    #[must_use]
    pub const fn new(matrices: KeywordMatrices) -> Self {
        Self { matrices }
    }

    /// Vendors whose lower-cased name occurs anywhere in `html`, in catalog
    /// order.
    #[must_use]
    pub fn detect_technologies(&self, html: &str) -> Vec<String> {
        let html = lower(html);
        self.matrices
            .vendors
            .iter()
            .filter(|vendor| html.contains(vendor.to_lowercase().as_str()))
            .cloned()
            .collect()
    }

    /// First matching industry label, or the fallback.
    #[must_use]
    pub fn industry(&self, text: &str) -> &str {
        let text = lower(text);
        self.matrices
            .industries
            .iter()
            .find(|rule| rule.matches(&text))
            .map_or(self.matrices.industry_fallback.as_str(), |rule| {
                rule.label.as_str()
            })
    }

    /// Every matching offer label in declaration order; may be empty.
    #[must_use]
    pub fn offers(&self, text: &str) -> Vec<String> {
        let text = lower(text);
        self.matrices
            .offers
            .iter()
            .filter(|rule| rule.matches(&text))
            .map(|rule| rule.label.clone())
            .collect()
    }

    /// Every matching service category in declaration order. Never empty:
    /// falls back to a single generic category.
    #[must_use]
    pub fn services(&self, text: &str) -> Vec<String> {
        let text = lower(text);
        let found: Vec<String> = self
            .matrices
            .services
            .iter()
            .filter(|rule| rule.matches(&text))
            .map(|rule| rule.label.clone())
            .collect();
        if found.is_empty() {
            vec![self.matrices.service_fallback.clone()]
        } else {
            found
        }
    }

    /// Weakness label: the last rule that matches, or the default.
    #[must_use]
    pub fn weakness(&self, html: &str, careers_text: &str, technologies: &[String]) -> &str {
        let html = lower(html);
        let careers = lower(careers_text);
        let mut label = self.matrices.weakness.default.as_str();
        for rule in &self.matrices.weakness.rules {
            let hit = match &rule.signal {
                WeaknessSignal::CareersWithoutVendor(keyword) => {
                    technologies.is_empty() && careers.contains(keyword.as_str())
                }
                WeaknessSignal::MarkupContains(keyword) => html.contains(keyword.as_str()),
            };
            if hit {
                label = rule.label.as_str();
            }
        }
        label
    }

    /// Derive both profiles from the gathered evidence.
    #[must_use]
    pub fn classify(&self, evidence: Evidence<'_>) -> (TargetProfile, MyProfile) {
        let Evidence {
            target,
            mine,
            careers_text,
            news,
        } = evidence;

        let technologies = self.detect_technologies(&target.raw_html);
        let weakness = self
            .weakness(&target.raw_html, careers_text, &technologies)
            .to_string();

        let target_profile = TargetProfile {
            name: derive_name(&target.url),
            url: target.url.clone(),
            industry: self.industry(&target.visible_text).to_string(),
            offers: self.offers(&target.visible_text),
            hiring: HiringIntensity::from_careers_len(careers_text.chars().count()),
            weakness,
            risk: LegalFramework::from_url(&target.url),
            location: DEFAULT_LOCATION.to_string(),
            news: news.to_vec(),
            technologies,
        };
        let my_profile = MyProfile {
            name: derive_name(&mine.url),
            url: mine.url.clone(),
            services: self.services(&mine.visible_text),
        };
        (target_profile, my_profile)
    }
}

fn lower(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_uppercase) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
