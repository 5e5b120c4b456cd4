use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{HiringIntensity, LegalFramework};

/// Shown when no vendor technology was detected on the target site.
pub const NO_TECHNOLOGY_LABEL: &str = "Custom Infrastructure";

/// Shown when no offer category matched the target site.
pub const NO_OFFERS_LABEL: &str = "Enterprise Solutions";

/// Operational scope; the heuristics never narrow it further.
pub const DEFAULT_LOCATION: &str = "Global";

/// Everything inferred about the prospect company.
///
/// Every field is populated. List fields may be empty; use the `*_display`
/// accessors when rendering so an empty list shows its fallback label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TargetProfile {
    pub name: String,
    pub url: String,
    pub industry: String,
    /// Vendor names in catalog order.
    pub technologies: Vec<String>,
    /// Offer labels in declaration order.
    pub offers: Vec<String>,
    pub hiring: HiringIntensity,
    pub weakness: String,
    pub risk: LegalFramework,
    pub location: String,
    /// One to three headline strings; flavor text only.
    pub news: Vec<String>,
}

impl TargetProfile {
    /// Comma-joined technologies, or [`NO_TECHNOLOGY_LABEL`].
    #[must_use]
    pub fn technologies_display(&self) -> String {
        join_or(&self.technologies, NO_TECHNOLOGY_LABEL)
    }

    /// Comma-joined offers, or [`NO_OFFERS_LABEL`].
    #[must_use]
    pub fn offers_display(&self) -> String {
        join_or(&self.offers, NO_OFFERS_LABEL)
    }

    /// First detected technology, or a generic phrase for script text.
    #[must_use]
    pub fn lead_technology(&self) -> &str {
        self.technologies
            .first()
            .map_or("their current stack", String::as_str)
    }
}

/// What the operator's own company can pitch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MyProfile {
    pub name: String,
    pub url: String,
    /// Service categories in declaration order. Never empty.
    pub services: Vec<String>,
}

impl MyProfile {
    /// The first service category, used as the primary pitch.
    #[must_use]
    pub fn primary_service(&self) -> &str {
        self.services.first().map_or("", String::as_str)
    }
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> TargetProfile {
        TargetProfile {
            name: "Acme".into(),
            url: "https://acme.com".into(),
            industry: "Commercial Services".into(),
            technologies: Vec::new(),
            offers: Vec::new(),
            hiring: HiringIntensity::StableOperations,
            weakness: "Operational Data Silos".into(),
            risk: LegalFramework::CcpaModerate,
            location: DEFAULT_LOCATION.into(),
            news: vec!["headline".into()],
        }
    }

    #[test]
    fn empty_lists_fall_back_to_labels() {
        let profile = target();
        assert_eq!(profile.technologies_display(), NO_TECHNOLOGY_LABEL);
        assert_eq!(profile.offers_display(), NO_OFFERS_LABEL);
        assert_eq!(profile.lead_technology(), "their current stack");
    }

    #[test]
    fn populated_lists_join_in_order() {
        let profile = TargetProfile {
            technologies: vec!["Salesforce".into(), "AWS".into()],
            offers: vec!["Financial Services".into()],
            ..target()
        };
        assert_eq!(profile.technologies_display(), "Salesforce, AWS");
        assert_eq!(profile.offers_display(), "Financial Services");
        assert_eq!(profile.lead_technology(), "Salesforce");
    }

    #[test]
    fn primary_service_is_first() {
        let me = MyProfile {
            name: "Us".into(),
            url: "https://us.io".into(),
            services: vec!["Sales Tech Acceleration".into(), "Cloud Transformation".into()],
        };
        assert_eq!(me.primary_service(), "Sales Tech Acceleration");
    }
}
