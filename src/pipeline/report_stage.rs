//! Report output stage.

use super::{should_use_color, write_output, OutputTarget, ParsedSnapshot, PipelineError};
use crate::config::DiffConfig;
use crate::diff::DifferenceReport;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::Result;

/// Render `report` in the configured format and write it to the configured
/// destination.
pub fn output_report(
    config: &DiffConfig,
    report: &DifferenceReport,
    baseline: &ParsedSnapshot,
    candidate: &ParsedSnapshot,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let format = config.output.effective_format();

    let mut report_config = ReportConfig::default().with_metadata(ReportMetadata {
        baseline: Some(baseline.origin.to_string()),
        candidate: Some(candidate.origin.to_string()),
        baseline_operators: Some(baseline.snapshot.operator_count()),
        candidate_operators: Some(candidate.snapshot.operator_count()),
        generated_at: Some(chrono::Utc::now()),
    });
    if let Some(max_items) = config.output.max_items {
        report_config = report_config.with_max_items(max_items);
    }

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(format, use_color, config.output.pretty);
    let rendered = reporter
        .generate_diff_report(report, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&rendered, &output_target, config.behavior.quiet)
}
