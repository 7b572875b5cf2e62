//! Operator directory diff engine.
//!
//! Comparison runs in three stages:
//!
//! 1. [`extract_operators`] flattens each snapshot into an
//!    [`ExtractedDirectory`](crate::model::ExtractedDirectory) keyed by
//!    (operator id, country code).
//! 2. [`ExactMatchDiffer`] pairs entries by key and then by name, producing
//!    name changes, id changes, additions and removals.
//! 3. [`FuzzyMatcher`] cross-checks the leftovers of both sides for
//!    probable renames using a [`NameMatcher`].
//!
//! # Example
//!
//! ```ignore
//! use operator_diff::diff::DiffEngine;
//!
//! let engine = DiffEngine::new();
//! let report = engine.diff(&baseline, &candidate);
//! println!("{} changes", report.summary().total_changes);
//! ```

mod engine;
mod exact;
mod extract;
mod fuzzy;
mod result;
pub mod traits;

pub use engine::{compute_differences, DiffEngine};
pub use exact::ExactMatchDiffer;
pub use extract::extract_operators;
pub use fuzzy::{FuzzyMatchConfig, FuzzyMatcher, SubstringMatcher};
pub use result::{
    DiffSummary, DifferenceReport, FuzzyMatch, IdChange, NameChange, OperatorChange,
};
pub use traits::{ChangeComputer, ExactChangeSet, NameMatcher, Residual};
