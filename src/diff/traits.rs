//! Trait definitions for diff computation strategies.
//!
//! This module provides the seams between the diff stages: a
//! [`ChangeComputer`] turns two directories into categorized changes, and a
//! [`NameMatcher`] decides whether two leftover names look like a rename.

use super::{IdChange, NameChange, OperatorChange};
use crate::model::{ExtractedDirectory, OperatorEntry, OperatorKey};
use std::borrow::Cow;

/// Trait for computing a category of changes between two directories.
pub trait ChangeComputer: Send + Sync {
    /// The type of changes this computer produces.
    type ChangeSet<'a>;

    /// Compute changes between baseline and candidate directories.
    fn compute<'a>(
        &self,
        baseline: &'a ExtractedDirectory,
        candidate: &'a ExtractedDirectory,
    ) -> Self::ChangeSet<'a>;

    /// Get the name of this change computer for logging/debugging.
    fn name(&self) -> &str;
}

/// Decides whether a leftover baseline name and a leftover candidate name
/// are plausibly the same operator.
///
/// The fuzzy pass calls [`normalize`](Self::normalize) once per residual
/// entry and hands the normalized forms to [`is_match`](Self::is_match).
pub trait NameMatcher: Send + Sync {
    /// Canonical form of a name used for comparison.
    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(name)
    }

    /// Returns true if the normalized `old_name` and `new_name` should be
    /// reported as a fuzzy match.
    fn is_match(&self, old_name: &str, new_name: &str) -> bool;

    /// Get the name of this matcher for logging/debugging.
    fn name(&self) -> &str;
}

/// Entries left unresolved by exact matching, in traversal order.
///
/// Borrows from the directory it was computed from; it never owns or
/// alters directory state.
#[derive(Debug, Clone, Default)]
pub struct Residual<'a> {
    entries: Vec<(&'a OperatorKey, &'a OperatorEntry)>,
}

impl<'a> Residual<'a> {
    pub(crate) fn push(&mut self, key: &'a OperatorKey, entry: &'a OperatorEntry) {
        self.entries.push((key, entry));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a OperatorKey, &'a OperatorEntry)> + '_ {
        self.entries.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Output of the exact-match pass: four categories plus the leftovers of
/// each side.
#[derive(Debug, Clone, Default)]
pub struct ExactChangeSet<'a> {
    pub same_id_name_changed: Vec<NameChange>,
    pub id_changed_name_same: Vec<IdChange>,
    pub added: Vec<OperatorChange>,
    pub removed: Vec<OperatorChange>,
    /// Baseline entries whose key has no candidate counterpart
    pub baseline_residual: Residual<'a>,
    /// Candidate entries whose key has no baseline counterpart
    pub candidate_residual: Residual<'a>,
}

impl ExactChangeSet<'_> {
    /// True if all four exact-match categories are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.same_id_name_changed.is_empty()
            && self.id_changed_name_same.is_empty()
            && self.added.is_empty()
            && self.removed.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.same_id_name_changed.len()
            + self.id_changed_name_same.len()
            + self.added.len()
            + self.removed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_change_set_empty() {
        let set = ExactChangeSet::default();
        assert!(set.is_empty());
        assert_eq!(set.total(), 0);
        assert!(set.baseline_residual.is_empty());
    }

    #[test]
    fn test_residual_preserves_push_order() {
        let a = OperatorKey::new("2", "US");
        let b = OperatorKey::new("1", "US");
        let e = OperatorEntry::new("Acme", "US");

        let mut residual = Residual::default();
        residual.push(&a, &e);
        residual.push(&b, &e);

        let ids: Vec<_> = residual.iter().map(|(k, _)| k.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}
