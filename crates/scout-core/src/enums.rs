//! Fixed label enums for scout.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `label()` returns the human-readable text used in reports and scripts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which of the two audited sites a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Target,
    Mine,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Mine => "mine",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HiringIntensity
// ---------------------------------------------------------------------------

/// Hiring signal inferred from the size of the target's careers page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HiringIntensity {
    IntensiveGrowth,
    StableOperations,
}

impl HiringIntensity {
    /// Careers text longer than this many characters counts as intensive hiring.
    pub const INTENSIVE_THRESHOLD: usize = 1500;

    /// Classify from the visible text of the careers page (empty if none).
    #[must_use]
    pub const fn from_careers_len(len: usize) -> Self {
        if len > Self::INTENSIVE_THRESHOLD {
            Self::IntensiveGrowth
        } else {
            Self::StableOperations
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IntensiveGrowth => "intensive_growth",
            Self::StableOperations => "stable_operations",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IntensiveGrowth => "Intensive Growth",
            Self::StableOperations => "Stable Operations",
        }
    }
}

impl fmt::Display for HiringIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LegalFramework
// ---------------------------------------------------------------------------

/// Privacy regime guessed from the target's address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegalFramework {
    GdprStrict,
    CcpaModerate,
}

impl LegalFramework {
    /// Address fragments that indicate an EU/UK presence.
    pub const GDPR_MARKERS: [&'static str; 2] = [".uk", ".de"];

    /// Classify from a normalized target URL.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_lowercase();
        if Self::GDPR_MARKERS.iter().any(|m| lower.contains(m)) {
            Self::GdprStrict
        } else {
            Self::CcpaModerate
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GdprStrict => "gdpr_strict",
            Self::CcpaModerate => "ccpa_moderate",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GdprStrict => "GDPR / Strict",
            Self::CcpaModerate => "CCPA / Moderate",
        }
    }
}

impl fmt::Display for LegalFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
