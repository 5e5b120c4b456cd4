//! CLI response types returned as JSON by `scout` commands.
//!
//! These structs define the shape of JSON output for `scout audit`,
//! `scout vault list`, and `scout vault digest`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{HistoryRecord, MyProfile, TargetProfile};

/// Response from `scout audit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditReport {
    pub target: TargetProfile,
    pub me: MyProfile,
    pub playbook: Playbook,
    pub history: HistoryStatus,
}

/// Outcome of persisting the audit to the history store.
///
/// A failed write never discards the report; it is surfaced here instead.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryStatus {
    pub recorded: bool,
    pub record_id: Option<i64>,
    pub error: Option<String>,
}

impl HistoryStatus {
    #[must_use]
    pub const fn recorded(record_id: i64) -> Self {
        Self {
            recorded: true,
            record_id: Some(record_id),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            recorded: false,
            record_id: None,
            error: Some(error.into()),
        }
    }
}

/// Templated outreach material derived from the two profiles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Playbook {
    pub bridge: StrategicBridge,
    pub swot: Swot,
    pub stakeholders: Vec<Stakeholder>,
    pub email: EmailScript,
    pub phone_script: String,
    pub voicemail: String,
}

/// How my company's primary service maps onto the target's weakness.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategicBridge {
    pub headline: String,
    pub business_audit: String,
    pub solution_alignment: String,
    pub wedge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Swot {
    pub strength: String,
    pub weakness: String,
    pub opportunity: String,
    pub threat: String,
}

/// A decision-maker role with a people-search link.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Stakeholder {
    pub role: String,
    pub search_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmailScript {
    pub subject: String,
    pub body: String,
}

/// Response from `scout vault list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VaultListResponse {
    pub records: Vec<HistoryRecord>,
    pub total: u32,
}

/// Response from `scout vault digest`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VaultDigestResponse {
    pub salt: String,
    pub secret_digest: String,
}
