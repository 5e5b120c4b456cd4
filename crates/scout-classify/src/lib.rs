//! # scout-classify
//!
//! Turns two fetched home pages into a target profile and an operator
//! profile using fixed keyword matrices, then templates an outreach
//! playbook from them.
//!
//! - [`matrices`]: the immutable keyword tables.
//! - [`Classifier`]: pure functions from page text to labels.
//! - [`Analyzer`]: fetch orchestration around the classifier.
//! - [`playbook`]: outreach text templating.
//!
//! Every heuristic is a case-insensitive substring test. The labels are
//! deliberately coarse and carry no accuracy guarantee.

pub mod analyzer;
pub mod classifier;
pub mod matrices;
pub mod playbook;

mod error;

pub use analyzer::{Analysis, Analyzer};
pub use classifier::{Classifier, Evidence};
pub use error::AnalysisUnavailable;
pub use matrices::KeywordMatrices;
