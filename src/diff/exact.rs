//! Exact-match differ.
//!
//! Pairs baseline and candidate entries by key, then by name, and hands the
//! unresolved leftovers of each side to the fuzzy matcher.

use super::traits::{ChangeComputer, ExactChangeSet};
use super::{IdChange, NameChange, OperatorChange};
use crate::model::{ExtractedDirectory, OperatorEntry, OperatorKey};
use std::collections::{HashMap, HashSet};

/// Computes the four exact-match categories.
///
/// The candidate directory is never mutated. Key matches are tracked in a
/// consumed-key set and the candidate residual is built from what is left.
///
/// # Known quirk
///
/// The name lookup for unmatched candidate keys scans the whole baseline,
/// including entries already resolved by key. A baseline operator that was
/// renamed in place can therefore also be reported as the old side of an
/// id change when another candidate entry carries its old name. This mirrors
/// the behavior of the existing tooling and is kept until product owners
/// decide whether it is intended.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchDiffer;

impl ExactMatchDiffer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChangeComputer for ExactMatchDiffer {
    type ChangeSet<'a> = ExactChangeSet<'a>;

    fn compute<'a>(
        &self,
        baseline: &'a ExtractedDirectory,
        candidate: &'a ExtractedDirectory,
    ) -> ExactChangeSet<'a> {
        let mut result = ExactChangeSet::default();
        let mut consumed: HashSet<&OperatorKey> = HashSet::new();

        // Pass 1: every baseline entry, matched by key.
        for (key, old_entry) in baseline {
            if let Some(new_entry) = candidate.get(key) {
                if old_entry != new_entry {
                    result.same_id_name_changed.push(NameChange {
                        id: key.id.clone(),
                        old_name: old_entry.name.clone(),
                        new_name: new_entry.name.clone(),
                        country_code: key.country_code.clone(),
                    });
                }
                consumed.insert(key);
            } else {
                result.removed.push(OperatorChange {
                    id: key.id.clone(),
                    name: old_entry.name.clone(),
                    country_code: key.country_code.clone(),
                });
                result.baseline_residual.push(key, old_entry);
            }
        }

        // Pass 2: candidate keys not matched in pass 1. The name lookup runs
        // against the whole baseline, including entries already resolved by
        // key in pass 1.
        let name_index = first_key_by_entry(baseline);
        for (key, new_entry) in candidate {
            if consumed.contains(key) {
                continue;
            }
            result.candidate_residual.push(key, new_entry);

            if let Some(old_key) = name_index.get(new_entry) {
                result.id_changed_name_same.push(IdChange {
                    old_id: old_key.id.clone(),
                    new_id: key.id.clone(),
                    name: new_entry.name.clone(),
                    country_code: old_key.country_code.clone(),
                });
            } else {
                result.added.push(OperatorChange {
                    id: key.id.clone(),
                    name: new_entry.name.clone(),
                    country_code: key.country_code.clone(),
                });
            }
        }

        tracing::debug!(
            name_changed = result.same_id_name_changed.len(),
            id_changed = result.id_changed_name_same.len(),
            added = result.added.len(),
            removed = result.removed.len(),
            baseline_residual = result.baseline_residual.len(),
            candidate_residual = result.candidate_residual.len(),
            "exact-match pass complete"
        );

        result
    }

    fn name(&self) -> &'static str {
        "ExactMatchDiffer"
    }
}

/// Index each distinct entry to the first key (in traversal order) holding it.
fn first_key_by_entry(directory: &ExtractedDirectory) -> HashMap<&OperatorEntry, &OperatorKey> {
    let mut index = HashMap::with_capacity(directory.len());
    for (key, entry) in directory {
        index.entry(entry).or_insert(key);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(entries: &[(&str, &str, &str)]) -> ExtractedDirectory {
        entries
            .iter()
            .map(|(id, name, cc)| (OperatorKey::new(*id, *cc), OperatorEntry::new(*name, *cc)))
            .collect()
    }

    #[test]
    fn test_unchanged_entries_produce_nothing() {
        let a = dir(&[("1", "Acme", "US"), ("2", "Bell", "CA")]);
        let result = ExactMatchDiffer::new().compute(&a, &a);
        assert!(result.is_empty());
        assert!(result.baseline_residual.is_empty());
        assert!(result.candidate_residual.is_empty());
    }

    #[test]
    fn test_same_key_new_name() {
        let old = dir(&[("1", "Acme", "US")]);
        let new = dir(&[("1", "Acme Corp", "US")]);
        let result = ExactMatchDiffer::new().compute(&old, &new);

        assert_eq!(
            result.same_id_name_changed,
            vec![NameChange {
                id: "1".into(),
                old_name: "Acme".into(),
                new_name: "Acme Corp".into(),
                country_code: "US".into(),
            }]
        );
        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        // Key matches are fully resolved.
        assert!(result.baseline_residual.is_empty());
        assert!(result.candidate_residual.is_empty());
    }

    #[test]
    fn test_new_id_same_name() {
        let old = dir(&[("1", "Acme", "US")]);
        let new = dir(&[("2", "Acme", "US")]);
        let result = ExactMatchDiffer::new().compute(&old, &new);

        assert_eq!(
            result.id_changed_name_same,
            vec![IdChange {
                old_id: "1".into(),
                new_id: "2".into(),
                name: "Acme".into(),
                country_code: "US".into(),
            }]
        );
        assert!(result.added.is_empty());
        // The old key has no counterpart, so it is still reported as removed.
        assert_eq!(result.removed.len(), 1);
        // Id-changed entries stay in the candidate residual.
        assert_eq!(result.candidate_residual.len(), 1);
        assert_eq!(result.baseline_residual.len(), 1);
    }

    #[test]
    fn test_same_name_in_other_country_is_added() {
        let old = dir(&[("1", "Acme", "US")]);
        let new = dir(&[("2", "Acme", "CA")]);
        let result = ExactMatchDiffer::new().compute(&old, &new);

        assert!(result.id_changed_name_same.is_empty());
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].country_code, "CA");
    }

    #[test]
    fn test_name_lookup_uses_full_baseline() {
        // "1@US" is resolved by key in pass 1, yet it still satisfies the
        // name lookup for the new key "9@US".
        let old = dir(&[("1", "Acme", "US")]);
        let new = dir(&[("1", "Acme", "US"), ("9", "Acme", "US")]);
        let result = ExactMatchDiffer::new().compute(&old, &new);

        assert_eq!(result.id_changed_name_same.len(), 1);
        assert_eq!(result.id_changed_name_same[0].old_id, "1");
        assert_eq!(result.id_changed_name_same[0].new_id, "9");
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_name_lookup_takes_first_baseline_match() {
        let old = dir(&[("5", "Acme", "US"), ("3", "Acme", "US")]);
        let new = dir(&[("8", "Acme", "US")]);
        let result = ExactMatchDiffer::new().compute(&old, &new);

        assert_eq!(result.id_changed_name_same.len(), 1);
        assert_eq!(result.id_changed_name_same[0].old_id, "5");
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let old = dir(&[("1", "Acme", "US")]);
        let new = dir(&[("1", "Acme Corp", "US"), ("2", "Bell", "US")]);
        let before = new.clone();
        let _ = ExactMatchDiffer::new().compute(&old, &new);
        assert_eq!(new, before);
    }

    #[test]
    fn test_traversal_order_is_preserved() {
        let old = dir(&[("3", "C", "US"), ("1", "A", "US"), ("2", "B", "US")]);
        let new = ExtractedDirectory::new();
        let result = ExactMatchDiffer::new().compute(&old, &new);

        let ids: Vec<_> = result.removed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
