//! Keyword matrices: the immutable tables every classification reads.
//!
//! All keywords are stored lower-case and matched as plain substrings, not
//! words. `"ai"` matches inside `"maintain"` and `"aws"` inside `"awsome"`;
//! that imprecision is part of the heuristic and is covered by tests.

use serde::{Deserialize, Serialize};

// ── Default tables ────────────────────────────────────────────────

/// Vendor brands looked for in the target's raw markup, in catalog order.
pub const VENDOR_CATALOG: &[&str] = &[
    "Salesforce",
    "AWS",
    "HubSpot",
    "Zendesk",
    "Shopify",
    "WordPress",
    "Oracle",
    "SAP",
    "ServiceNow",
];

/// Service categories looked for in the operator's visible text.
const SERVICE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Cloud Transformation", &["aws", "cloud", "azure", "devops"]),
    (
        "AI/Automation Intelligence",
        &["ai", "machine learning", "automation"],
    ),
    (
        "Cybersecurity & Compliance",
        &["security", "encryption", "soc", "compliance"],
    ),
    (
        "Sales Tech Acceleration",
        &["salesforce", "hubspot", "crm", "pipeline"],
    ),
];

pub const SERVICE_FALLBACK: &str = "Digital Business Modernization";

/// Industry decision list over the target's visible text.
const INDUSTRIES: &[(&str, &[&str])] = &[
    ("High-Tech / Enterprise", &["software"]),
    ("Digital Platforms", &["platform", "saas"]),
    ("Financial Services", &["bank", "payment"]),
];

pub const INDUSTRY_FALLBACK: &str = "Commercial Services";

/// Offer categories over the target's visible text.
const OFFERS: &[(&str, &[&str])] = &[
    ("Digital Platform Solutions", &["platform", "saas"]),
    ("Financial Services", &["bank", "payment"]),
];

pub const WEAKNESS_DEFAULT: &str = "Operational Data Silos";
pub const WEAKNESS_INFRASTRUCTURE: &str = "Infrastructure Deficit for Scale";
pub const WEAKNESS_LEGACY: &str = "Legacy Technical Debt (Security & Scaling Risk)";

// ── Types ─────────────────────────────────────────────────────────

/// A label that applies when any of its keywords occurs in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    #[must_use]
    pub fn new(label: &str, keywords: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True if any keyword is a substring of `lower_text`.
    ///
    /// `lower_text` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, lower_text: &str) -> bool {
        self.keywords.iter().any(|k| lower_text.contains(k.as_str()))
    }
}

/// Evidence a weakness rule looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "keyword")]
pub enum WeaknessSignal {
    /// The careers page text contains the keyword and no vendor was detected.
    CareersWithoutVendor(String),
    /// The target's raw markup contains the keyword.
    MarkupContains(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaknessRule {
    pub signal: WeaknessSignal,
    pub label: String,
}

/// Ordered weakness rules. All rules are evaluated top to bottom and the
/// last one that matches wins; `default` applies when none do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaknessMatrix {
    pub default: String,
    pub rules: Vec<WeaknessRule>,
}

/// Every table the classifier consults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatrices {
    /// Vendor display names; matched case-insensitively against raw markup.
    pub vendors: Vec<String>,
    /// Service categories in declaration order.
    pub services: Vec<KeywordRule>,
    pub service_fallback: String,
    /// Industry decision list; first match wins.
    pub industries: Vec<KeywordRule>,
    pub industry_fallback: String,
    /// Offer categories in declaration order; may all miss.
    pub offers: Vec<KeywordRule>,
    pub weakness: WeaknessMatrix,
}

impl Default for KeywordMatrices {
    fn default() -> Self {
        Self {
            vendors: VENDOR_CATALOG.iter().map(ToString::to_string).collect(),
            services: rules(SERVICE_CATEGORIES),
            service_fallback: SERVICE_FALLBACK.to_string(),
            industries: rules(INDUSTRIES),
            industry_fallback: INDUSTRY_FALLBACK.to_string(),
            offers: rules(OFFERS),
            weakness: WeaknessMatrix {
                default: WEAKNESS_DEFAULT.to_string(),
                rules: vec![
                    WeaknessRule {
                        signal: WeaknessSignal::CareersWithoutVendor("engineer".to_string()),
                        label: WEAKNESS_INFRASTRUCTURE.to_string(),
                    },
                    WeaknessRule {
                        signal: WeaknessSignal::MarkupContains("wordpress".to_string()),
                        label: WEAKNESS_LEGACY.to_string(),
                    },
                ],
            },
        }
    }
}

fn rules(table: &[(&str, &[&str])]) -> Vec<KeywordRule> {
    table
        .iter()
        .map(|(label, keywords)| KeywordRule::new(label, keywords))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_lowercase() {
        let matrices = KeywordMatrices::default();
        for rule in matrices
            .services
            .iter()
            .chain(&matrices.industries)
            .chain(&matrices.offers)
        {
            for keyword in &rule.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn service_categories_keep_declaration_order() {
        let matrices = KeywordMatrices::default();
        let labels: Vec<&str> = matrices.services.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Cloud Transformation",
                "AI/Automation Intelligence",
                "Cybersecurity & Compliance",
                "Sales Tech Acceleration",
            ]
        );
        assert_eq!(matrices.services.len(), 4);
        assert_eq!(matrices.vendors.len(), 9);
    }

    #[test]
    fn legacy_rule_is_last() {
        let matrices = KeywordMatrices::default();
        let last = matrices.weakness.rules.last().unwrap();
        assert_eq!(last.label, WEAKNESS_LEGACY);
    }

    #[test]
    fn keyword_rule_is_substring_match() {
        let rule = KeywordRule::new("Cloud", &["AWS"]);
        assert_eq!(rule.keywords, vec!["aws"]);
        assert!(rule.matches("an awsome day"));
        assert!(!rule.matches("amazon web services"));
    }
}
