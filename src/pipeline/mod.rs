//! Pipeline orchestration for snapshot operations.
//!
//! This module provides shared orchestration logic for load → diff → report
//! workflows, reducing duplication across CLI command handlers.

mod diff_stage;
#[cfg(feature = "fetch")]
mod fetch_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
#[cfg(feature = "fetch")]
pub use fetch_stage::fetch_snapshot_with_context;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{load_candidate, parse_snapshot_with_context, ParsedSnapshot, SnapshotOrigin};
pub use report_stage::output_report;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a snapshot file
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Failed to retrieve the candidate snapshot from the remote source
    #[error("Fetch failed: {source}")]
    FetchFailed {
        #[source]
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or changes without --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected and --fail-on-change was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
