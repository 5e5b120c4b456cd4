//! Entity structs for scout domain objects.
//!
//! `FetchResult` and the two profiles are ephemeral and live for one audit.
//! `HistoryRecord` maps to the `audit_history` table in the libSQL store.

mod fetch;
mod history;
mod profile;

pub use fetch::FetchResult;
pub use history::{HistoryEntry, HistoryRecord};
pub use profile::{DEFAULT_LOCATION, MyProfile, NO_OFFERS_LABEL, NO_TECHNOLOGY_LABEL, TargetProfile};
