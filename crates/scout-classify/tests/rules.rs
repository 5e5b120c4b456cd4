//! Keyword rule tables exercised through the public classifier.

use pretty_assertions::assert_eq;
use rstest::rstest;
use scout_classify::Classifier;
use scout_classify::matrices::{
    INDUSTRY_FALLBACK, SERVICE_FALLBACK, WEAKNESS_DEFAULT, WEAKNESS_INFRASTRUCTURE,
    WEAKNESS_LEGACY,
};

fn classifier() -> Classifier {
    Classifier::default()
}

#[rstest]
#[case("we sell enterprise software", "High-Tech / Enterprise")]
#[case("the saas platform for teams", "Digital Platforms")]
#[case("modern payment rails", "Financial Services")]
#[case("software for every bank", "High-Tech / Enterprise")]
#[case("family bakery since 1920", INDUSTRY_FALLBACK)]
fn industry_first_match_wins(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(classifier().industry(text), expected);
}

#[rstest]
#[case("saas for banks", &["Digital Platform Solutions", "Financial Services"])]
#[case("payment platform", &["Digital Platform Solutions", "Financial Services"])]
#[case("online platform", &["Digital Platform Solutions"])]
#[case("a bakery", &[])]
fn offers_in_declaration_order(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(classifier().offers(text), expected);
}

#[rstest]
#[case("we are a salesforce partner running in the cloud", &["Cloud Transformation", "Sales Tech Acceleration"])]
#[case("salesforce runs the customer cloud", &["Cloud Transformation", "Sales Tech Acceleration"])]
#[case("crm consulting", &["Sales Tech Acceleration"])]
#[case("soc 2 audits", &["Cybersecurity & Compliance"])]
#[case("machine learning", &["AI/Automation Intelligence"])]
fn services_in_declaration_order(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(classifier().services(text), expected);
}

#[test]
fn salesforce_on_my_site_includes_sales_tech() {
    let services = classifier().services("certified devops and salesforce consultants");
    assert_eq!(services, vec!["Cloud Transformation", "Sales Tech Acceleration"]);

    // Leads only when no earlier category matches.
    let services = classifier().services("salesforce and hubspot partners");
    assert_eq!(services, vec!["Sales Tech Acceleration"]);
}

#[test]
fn no_service_trigger_gives_only_fallback() {
    assert_eq!(classifier().services("hello world"), vec![SERVICE_FALLBACK]);
    assert_eq!(classifier().services(""), vec![SERVICE_FALLBACK]);
}

#[test]
fn substring_collisions_are_kept() {
    // "ai" hides inside "maintain"; substring matching is the contract.
    assert_eq!(
        classifier().services("we maintain gardens"),
        vec!["AI/Automation Intelligence"]
    );
    assert_eq!(classifier().detect_technologies("an awsome site"), vec!["AWS"]);
}

#[test]
fn vendors_follow_catalog_order() {
    let html = "<script src=servicenow.js></script><div>zendesk salesforce</div>";
    assert_eq!(
        classifier().detect_technologies(html),
        vec!["Salesforce", "Zendesk", "ServiceNow"]
    );
}

#[rstest]
#[case("<p>hello</p>", "", &[], WEAKNESS_DEFAULT)]
#[case("<p>hello</p>", "senior engineer wanted", &[], WEAKNESS_INFRASTRUCTURE)]
#[case("<p>hello</p>", "senior engineer wanted", &["AWS"], WEAKNESS_DEFAULT)]
#[case("<meta name=generator content=wordpress>", "", &[], WEAKNESS_LEGACY)]
#[case("<meta content=WordPress>", "engineer", &[], WEAKNESS_LEGACY)]
#[case("wordpress on aws", "engineer", &["AWS", "WordPress"], WEAKNESS_LEGACY)]
fn weakness_last_matching_rule_wins(
    #[case] html: &str,
    #[case] careers: &str,
    #[case] technologies: &[&str],
    #[case] expected: &str,
) {
    let technologies: Vec<String> = technologies.iter().map(ToString::to_string).collect();
    assert_eq!(
        classifier().weakness(html, careers, &technologies),
        expected
    );
}
