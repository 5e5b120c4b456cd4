use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A persisted, append-only record of one successful audit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: i64,
    pub target_identifier: String,
    pub my_identifier: String,
    /// Derived target name. `None` for rows written before names were stored.
    pub target_name: Option<String>,
    /// Derived my-company name. `None` for rows written before names were stored.
    pub my_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Values supplied by the caller when appending a history record.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub target_identifier: String,
    pub my_identifier: String,
    pub target_name: Option<String>,
    pub my_name: Option<String>,
}

impl HistoryEntry {
    /// Entry carrying only the two identifiers.
    #[must_use]
    pub fn new(target_identifier: impl Into<String>, my_identifier: impl Into<String>) -> Self {
        Self {
            target_identifier: target_identifier.into(),
            my_identifier: my_identifier.into(),
            target_name: None,
            my_name: None,
        }
    }

    /// Attach the derived display names.
    #[must_use]
    pub fn with_names(mut self, target_name: impl Into<String>, my_name: impl Into<String>) -> Self {
        self.target_name = Some(target_name.into());
        self.my_name = Some(my_name.into());
        self
    }
}
