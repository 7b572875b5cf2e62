//! Remote fetch stage.

use super::{ParsedSnapshot, PipelineError, SnapshotOrigin};
use crate::config::SourceConfig;
use crate::fetch::{SummaryClient, SummaryClientConfig};
use anyhow::{Context, Result};

/// Fetch the candidate snapshot and optionally keep a copy of the body.
///
/// The body is written to `source.save_to` before it is parsed, so a copy
/// survives even when the response turns out to be malformed.
pub fn fetch_snapshot_with_context(
    source: &SourceConfig,
    api_key: &str,
    quiet: bool,
) -> Result<ParsedSnapshot> {
    if !quiet {
        tracing::info!("Fetching snapshot from {}", source.api_base);
    }

    let client = SummaryClient::new(SummaryClientConfig::from(source))
        .map_err(|e| PipelineError::FetchFailed { source: e.into() })?;
    let raw_content = client
        .fetch_raw(api_key)
        .map_err(|e| PipelineError::FetchFailed { source: e.into() })?;

    if let Some(path) = &source.save_to {
        std::fs::write(path, &raw_content)
            .with_context(|| format!("Failed to save fetched snapshot to {}", path.display()))?;
        if !quiet {
            tracing::info!("Fetched snapshot saved to {:?}", path);
        }
    }

    let snapshot = crate::parsers::parse_snapshot_str(&raw_content)
        .map_err(|e| PipelineError::FetchFailed { source: e.into() })?;

    if !quiet {
        tracing::info!(
            "Fetched {} countries, {} operators",
            snapshot.country_count(),
            snapshot.operator_count()
        );
    }

    Ok(ParsedSnapshot::new(
        snapshot,
        raw_content,
        SnapshotOrigin::Remote(source.api_base.clone()),
    ))
}
