//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two operator directory
//! snapshots.

use crate::config::{DiffConfig, Validatable};
use crate::diff::DifferenceReport;
use crate::pipeline::{
    compute_diff, exit_codes, load_candidate, output_report, parse_snapshot_with_context,
};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(crate::error::OperatorDiffError::validation(messages.join("; ")).into());
    }

    let mut baseline = parse_snapshot_with_context(&config.paths.baseline, quiet)?;
    let mut candidate = load_candidate(&config)?;

    if !quiet {
        tracing::info!(
            "Loaded {} operators from baseline, {} from candidate",
            baseline.snapshot().operator_count(),
            candidate.snapshot().operator_count()
        );
    }

    let report = compute_diff(&config, baseline.snapshot(), candidate.snapshot());
    let exit_code = determine_exit_code(&config, &report);

    baseline.drop_raw_content();
    candidate.drop_raw_content();
    output_report(&config, &report, &baseline, &candidate)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, report: &DifferenceReport) -> i32 {
    if config.behavior.fail_on_change && report.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
