//! Classification error types.

use thiserror::Error;

/// One of the two mandatory pages could not be fetched.
///
/// Deliberately carries no detail: the operator is told to check both
/// addresses, and the per-URL cause is in the `debug` log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Audit failed. Ensure URLs are reachable and valid.")]
pub struct AnalysisUnavailable;
