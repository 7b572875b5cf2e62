//! Snapshot diff engine implementation.

use super::exact::ExactMatchDiffer;
use super::extract::extract_operators;
use super::fuzzy::{FuzzyMatchConfig, FuzzyMatcher, SubstringMatcher};
use super::traits::{ChangeComputer, NameMatcher};
use super::DifferenceReport;
use crate::model::{ExtractedDirectory, RawSnapshot};

/// Diff engine for comparing operator directory snapshots.
pub struct DiffEngine {
    fuzzy_config: FuzzyMatchConfig,
    custom_matcher: Option<Box<dyn NameMatcher>>,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    pub fn new() -> Self {
        Self {
            fuzzy_config: FuzzyMatchConfig::default(),
            custom_matcher: None,
        }
    }

    /// Set fuzzy matching configuration
    #[must_use]
    pub fn with_fuzzy_config(mut self, config: FuzzyMatchConfig) -> Self {
        self.fuzzy_config = config;
        self
    }

    /// Set a custom name matcher for the fuzzy pass.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn NameMatcher>) -> Self {
        self.custom_matcher = Some(matcher);
        self
    }

    /// Check if a custom matcher is configured
    #[must_use]
    pub fn has_custom_matcher(&self) -> bool {
        self.custom_matcher.is_some()
    }

    #[must_use]
    pub const fn fuzzy_config(&self) -> &FuzzyMatchConfig {
        &self.fuzzy_config
    }

    /// Compare two snapshots and return the categorized differences.
    pub fn diff(&self, baseline: &RawSnapshot, candidate: &RawSnapshot) -> DifferenceReport {
        let old = extract_operators(baseline);
        let new = extract_operators(candidate);
        tracing::debug!(
            baseline = old.len(),
            candidate = new.len(),
            "extracted operator directories"
        );
        self.diff_directories(&old, &new)
    }

    /// Compare two already-extracted directories.
    pub fn diff_directories(
        &self,
        baseline: &ExtractedDirectory,
        candidate: &ExtractedDirectory,
    ) -> DifferenceReport {
        let exact = ExactMatchDiffer::new().compute(baseline, candidate);

        let default_matcher;
        let matcher: &dyn NameMatcher = match &self.custom_matcher {
            Some(m) => m.as_ref(),
            None => {
                default_matcher = SubstringMatcher::new().ignore_case(self.fuzzy_config.ignore_case);
                &default_matcher
            }
        };

        let fuzzy_matches = FuzzyMatcher::new(self.fuzzy_config.clone()).find_matches(
            &exact.baseline_residual,
            &exact.candidate_residual,
            matcher,
        );

        DifferenceReport {
            same_id_name_changed: exact.same_id_name_changed,
            id_changed_name_same: exact.id_changed_name_same,
            added: exact.added,
            removed: exact.removed,
            fuzzy_matches,
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two snapshots with default settings.
///
/// # Known quirk
///
/// Candidate entries with a new key are matched by name against the full
/// baseline, not only its unresolved entries. See [`ExactMatchDiffer`] for
/// the consequences; the behavior is retained pending product clarification.
///
/// ```
/// use operator_diff::{compute_differences, parse_snapshot_str};
///
/// let old = parse_snapshot_str(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#).unwrap();
/// let new = parse_snapshot_str(
///     r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme Two"},{"id":"7","name":"Acme"}]}]}"#,
/// )
/// .unwrap();
///
/// let report = compute_differences(&old, &new);
/// assert_eq!(report.same_id_name_changed.len(), 1);
/// assert_eq!(report.id_changed_name_same[0].old_id, "1");
/// ```
pub fn compute_differences(baseline: &RawSnapshot, candidate: &RawSnapshot) -> DifferenceReport {
    DiffEngine::new().diff(baseline, candidate)
}
