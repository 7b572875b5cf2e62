//! Diff computation stage.
//!
//! Encapsulates the core diff logic: extracting both directories, building
//! the engine from configuration, and running the diff.

use crate::config::DiffConfig;
use crate::diff::{extract_operators, DiffEngine, DifferenceReport};
use crate::model::RawSnapshot;

/// Run the core diff computation between two snapshots.
pub fn compute_diff(
    config: &DiffConfig,
    baseline: &RawSnapshot,
    candidate: &RawSnapshot,
) -> DifferenceReport {
    let quiet = config.behavior.quiet;

    let old = extract_operators(baseline);
    let new = extract_operators(candidate);
    old.log_collision_summary();
    new.log_collision_summary();

    if !quiet {
        tracing::info!(
            "Comparing {} baseline operators against {} candidate operators...",
            old.len(),
            new.len()
        );
    }

    let engine = DiffEngine::new().with_fuzzy_config(config.matching.to_fuzzy_config());
    let report = engine.diff_directories(&old, &new);

    if !quiet {
        let summary = report.summary();
        tracing::info!(
            "Found {} changes ({} renamed, {} re-keyed, {} added, {} removed) and {} fuzzy matches",
            summary.total_changes,
            summary.name_changed,
            summary.id_changed,
            summary.added,
            summary.removed,
            summary.fuzzy_matches
        );
    }

    report
}
