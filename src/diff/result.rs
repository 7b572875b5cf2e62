//! Diff result structures.
//!
//! Field names serialize in camelCase so the report reads
//! `{ operatorIdSameNameChanged, operatorIdChangedNameSame, operatorNew,
//! operatorRemoved, fuzzyMatches }`.

use serde::{Deserialize, Serialize};

/// Same key in both snapshots, different display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameChange {
    pub id: String,
    pub old_name: String,
    pub new_name: String,
    pub country_code: String,
}

/// Candidate-only key whose name and country match a baseline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdChange {
    pub old_id: String,
    pub new_id: String,
    pub name: String,
    /// Country of the matched baseline entry
    pub country_code: String,
}

/// An operator present on only one side (added or removed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorChange {
    pub id: String,
    pub name: String,
    pub country_code: String,
}

/// Probable rename linking a residual baseline entry to a residual candidate entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyMatch {
    pub old_id: String,
    pub new_id: String,
    pub old_name: String,
    pub new_name: String,
    /// Country of the baseline (old) entry
    pub country_code: String,
}

/// Categorized differences between a baseline and a candidate snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DifferenceReport {
    #[serde(rename = "operatorIdSameNameChanged")]
    pub same_id_name_changed: Vec<NameChange>,
    #[serde(rename = "operatorIdChangedNameSame")]
    pub id_changed_name_same: Vec<IdChange>,
    #[serde(rename = "operatorNew")]
    pub added: Vec<OperatorChange>,
    #[serde(rename = "operatorRemoved")]
    pub removed: Vec<OperatorChange>,
    #[serde(rename = "fuzzyMatches")]
    pub fuzzy_matches: Vec<FuzzyMatch>,
}

impl DifferenceReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-category counts.
    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        let name_changed = self.same_id_name_changed.len();
        let id_changed = self.id_changed_name_same.len();
        let added = self.added.len();
        let removed = self.removed.len();
        DiffSummary {
            name_changed,
            id_changed,
            added,
            removed,
            fuzzy_matches: self.fuzzy_matches.len(),
            total_changes: name_changed + id_changed + added + removed,
        }
    }

    /// True if any exact-match category is non-empty.
    ///
    /// Fuzzy matches are hints about entries already reported as added or
    /// removed, so they do not count on their own.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.same_id_name_changed.is_empty()
            || !self.id_changed_name_same.is_empty()
            || !self.added.is_empty()
            || !self.removed.is_empty()
    }

    /// True if every category, fuzzy matches included, is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_changes() && self.fuzzy_matches.is_empty()
    }
}

/// Summary statistics for a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub name_changed: usize,
    pub id_changed: usize,
    pub added: usize,
    pub removed: usize,
    pub fuzzy_matches: usize,
    pub total_changes: usize,
}
