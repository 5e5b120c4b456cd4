//! Outreach playbook templating.
//!
//! Pure string formatting over the two profiles. Nothing here inspects page
//! content; every sentence is a fixed template with profile fields spliced in.

use chrono::{Datelike, Utc};
use scout_core::entities::{MyProfile, TargetProfile};
use scout_core::responses::{EmailScript, Playbook, Stakeholder, StrategicBridge, Swot};

/// Roles suggested for the stakeholder radar, in display order.
pub const STAKEHOLDER_ROLES: &[&str] = &[
    "Chief Technology Officer",
    "VP Operations",
    "Head of Digital",
    "COO",
];

const PEOPLE_SEARCH_URL: &str = "https://www.linkedin.com/search/results/people/?keywords=";

/// Build the playbook, dating the voicemail hook to the current year.
#[must_use]
pub fn build(target: &TargetProfile, me: &MyProfile) -> Playbook {
    build_for_year(target, me, Utc::now().year())
}

/// Build the playbook with an explicit planning year.
#[must_use]
pub fn build_for_year(target: &TargetProfile, me: &MyProfile, year: i32) -> Playbook {
    let them = target.name.as_str();
    let us = me.name.as_str();
    let service = me.primary_service();
    let weakness = target.weakness.as_str();
    let hiring = target.hiring.label();

    Playbook {
        bridge: StrategicBridge {
            headline: format!("{us} → {them}"),
            business_audit: format!(
                "{them} is currently hiring for {hiring} but their infrastructure suggests a \
                 bottleneck in {weakness}."
            ),
            solution_alignment: format!(
                "As {us} is an expert in {service}, we provide the specific tools needed to \
                 bypass their current weakness."
            ),
            wedge: format!("Pitch a cost-saving audit for {service} to solve the {weakness} gap."),
        },
        swot: Swot {
            strength: format!("Significant footprint in {}.", target.industry),
            weakness: format!("{weakness}."),
            opportunity: format!("Transformation via {service}."),
            threat: "Sector agile competitors scaling faster.".to_string(),
        },
        stakeholders: stakeholders(them),
        email: EmailScript {
            subject: format!(
                "Question regarding {them}'s focus on {} growth",
                hiring.split_whitespace().next().unwrap_or(hiring)
            ),
            body: format!(
                "Hi [Name], I noticed {them}'s recent footprint in {industry}.\n\n\
                 Usually, when firms scale during {hiring} while leveraging {stack}, friction \
                 appears in {weakness}.\n\n\
                 At {us}, we've helped similar firms bridge this specific gap. Do you have 2 \
                 minutes to chat next Tuesday?",
                industry = target.industry,
                stack = target.lead_technology(),
            ),
        },
        phone_script: format!(
            "Hi [Name], it's [YourName] from {us}. I'm calling because I noticed you're scaling \
             your team. Most VPs I talk to say their biggest hurdle during this growth phase is \
             {weakness}. We've solved this for [Competitor]. Do you have a moment?"
        ),
        voicemail: format!(
            "Hi [Name], I have a specific insight regarding {them}'s {weakness} and its impact on \
             your {year} goals. I'll follow up with an email under the subject: {them} Strategy."
        ),
    }
}

/// People-search links for each radar role at `company`.
#[must_use]
pub fn stakeholders(company: &str) -> Vec<Stakeholder> {
    STAKEHOLDER_ROLES
        .iter()
        .map(|role| Stakeholder {
            role: (*role).to_string(),
            search_url: format!(
                "{PEOPLE_SEARCH_URL}{}",
                urlencoding::encode(&format!("{company} {role}"))
            ),
        })
        .collect()
}
