//! Snapshot loading stage.
//!
//! Reads snapshots from disk (or, for the candidate, from the remote
//! source) and keeps the body they were parsed from.

use super::PipelineError;
use crate::config::DiffConfig;
use crate::model::RawSnapshot;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where a snapshot was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOrigin {
    /// Read from a local file
    File(PathBuf),
    /// Fetched from the summary endpoint
    Remote(String),
}

impl std::fmt::Display for SnapshotOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// A parsed snapshot together with its source text
#[derive(Debug)]
pub struct ParsedSnapshot {
    /// The parsed snapshot
    pub snapshot: RawSnapshot,
    /// Original document body
    pub raw_content: String,
    /// Where the snapshot came from
    pub origin: SnapshotOrigin,
}

impl ParsedSnapshot {
    #[must_use]
    pub const fn new(snapshot: RawSnapshot, raw_content: String, origin: SnapshotOrigin) -> Self {
        Self {
            snapshot,
            raw_content,
            origin,
        }
    }

    /// Get a reference to the snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &RawSnapshot {
        &self.snapshot
    }

    /// Get a reference to the original document body
    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Drop the raw content to free memory once it is no longer needed.
    pub fn drop_raw_content(&mut self) {
        self.raw_content = String::new();
    }
}

/// Parse a snapshot file with context for error messages
pub fn parse_snapshot_with_context(path: &Path, quiet: bool) -> Result<ParsedSnapshot> {
    if !quiet {
        tracing::info!("Parsing snapshot: {:?}", path);
    }

    let parsed = read_and_parse(path).map_err(|source| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    if !quiet {
        tracing::info!(
            "Parsed {} countries, {} operators",
            parsed.snapshot.country_count(),
            parsed.snapshot.operator_count()
        );
    }

    Ok(parsed)
}

fn read_and_parse(path: &Path) -> Result<ParsedSnapshot> {
    let raw_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    let snapshot = crate::parsers::parse_snapshot_str(&raw_content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
    Ok(ParsedSnapshot::new(
        snapshot,
        raw_content,
        SnapshotOrigin::File(path.to_path_buf()),
    ))
}

/// Load the candidate snapshot named by `config`.
///
/// A candidate path is read from disk; without one the snapshot is fetched
/// from the configured remote source.
pub fn load_candidate(config: &DiffConfig) -> Result<ParsedSnapshot> {
    let quiet = config.behavior.quiet;
    if let Some(path) = &config.paths.candidate {
        return parse_snapshot_with_context(path, quiet);
    }

    #[cfg(feature = "fetch")]
    {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            anyhow::Error::new(crate::error::OperatorDiffError::fetch(
                "resolving credentials",
                crate::error::FetchErrorKind::MissingApiKey(config.source.api_key_env.clone()),
            ))
        })?;
        super::fetch_snapshot_with_context(&config.source, api_key, quiet)
    }

    #[cfg(not(feature = "fetch"))]
    {
        anyhow::bail!(
            "No candidate snapshot given and the 'fetch' feature is not enabled. \
             Pass a candidate file or rebuild with --features fetch."
        )
    }
}
