//! **Structural diff of telecom operator directory snapshots.**
//!
//! `operator-diff` compares two point-in-time copies of a hierarchical
//! operator directory (countries containing mobile operators, each with an
//! id and a display name) and reports what changed between them. It powers
//! both the `operator-diff` command-line tool and a Rust library for
//! programmatic use.
//!
//! ## Key Features
//!
//! - **Snapshot Parsing**: Reads the summary JSON document, tolerating
//!   countries with missing or null operator lists.
//! - **Categorized Diffing**: Reports operators renamed in place, re-keyed
//!   under a new id, added and removed.
//! - **Rename Heuristics**: A fuzzy pass pairs leftover removals and
//!   additions whose names contain one another.
//! - **Remote Candidates**: Fetches the current snapshot from the summary
//!   endpoint (requires the `fetch` feature, enabled by default).
//! - **Reporting**: JSON (the compatible wire document), a colored summary,
//!   and an aligned table.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The raw snapshot document ([`RawSnapshot`]) and the flat
//!   keyed view derived from it ([`ExtractedDirectory`]).
//! - **[`parsers`]**: Turns JSON text into a [`RawSnapshot`].
//! - **[`diff`]**: Home of the [`DiffEngine`], which runs the exact-match and
//!   fuzzy passes and produces a [`DifferenceReport`].
//! - **[`pipeline`]**: Load → diff → report orchestration shared by the CLI.
//! - **[`reports`]**: Output generators for every [`ReportFormat`].
//! - **[`config`]**: Typed configuration with YAML file discovery.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use operator_diff::{compute_differences, parse_snapshot};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let baseline = parse_snapshot(Path::new("response.json"))?;
//!     let candidate = parse_snapshot(Path::new("responseNew.json"))?;
//!
//!     let report = compute_differences(&baseline, &candidate);
//!     for change in &report.same_id_name_changed {
//!         println!("{}: {} -> {}", change.id, change.old_name, change.new_name);
//!     }
//!     println!("{} operators added", report.added.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Tuning the fuzzy pass
//!
//! ```
//! use operator_diff::diff::{DiffEngine, FuzzyMatchConfig};
//! use operator_diff::parse_snapshot_str;
//!
//! let old = parse_snapshot_str(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#).unwrap();
//! let new = parse_snapshot_str(r#"{"summary":[{"countryCode":"US","operators":[{"id":"2","name":"ACME Mobile"}]}]}"#).unwrap();
//!
//! let engine = DiffEngine::new()
//!     .with_fuzzy_config(FuzzyMatchConfig::default().with_ignore_case(true));
//! let report = engine.diff(&old, &new);
//! assert_eq!(report.fuzzy_matches.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `fetch` (default): Enables the blocking HTTP client for the summary
//!   endpoint. This adds the `reqwest` dependency.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigError, DiffConfig, DiffPaths,
    FetchConfig, MatchingConfig, OutputConfig, SourceConfig, Validatable,
};
pub use diff::{compute_differences, DiffEngine, DiffSummary, DifferenceReport};
pub use error::{ErrorContext, OperatorDiffError, Result};
pub use model::{
    CountryRecord, ExtractedDirectory, OperatorEntry, OperatorKey, OperatorRecord, RawSnapshot,
};
pub use parsers::{parse_snapshot, parse_snapshot_str};
pub use reports::{ReportFormat, ReportGenerator};

#[cfg(feature = "fetch")]
pub use fetch::{SummaryClient, SummaryClientConfig};
