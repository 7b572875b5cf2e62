//! Flat operator directories keyed by (operator id, country code).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite identifier of one operator entry within one snapshot.
///
/// Two keys are equal iff both components match exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorKey {
    pub id: String,
    pub country_code: String,
}

impl OperatorKey {
    pub fn new(id: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            country_code: country_code.into(),
        }
    }
}

impl fmt::Display for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.country_code)
    }
}

/// Value stored for a key: display name paired with its country code.
///
/// Entries compare equal when both name and country match, which is the
/// "same name" test used when correlating entries whose ids differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorEntry {
    pub name: String,
    pub country_code: String,
}

impl OperatorEntry {
    pub fn new(name: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_code: country_code.into(),
        }
    }
}

/// Mapping `OperatorKey -> OperatorEntry` for one snapshot.
///
/// Traversal order is first-insertion order. Re-inserting an existing key
/// replaces the value in place (last write wins) without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDirectory {
    entries: IndexMap<OperatorKey, OperatorEntry>,
    /// Number of inserts that overwrote an existing key
    collision_count: usize,
}

impl ExtractedDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the previous entry if the key was present.
    pub fn insert(&mut self, key: OperatorKey, entry: OperatorEntry) -> Option<OperatorEntry> {
        let previous = self.entries.insert(key, entry);
        if previous.is_some() {
            self.collision_count += 1;
        }
        previous
    }

    #[must_use]
    pub fn get(&self, key: &OperatorKey) -> Option<&OperatorEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &OperatorKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate entries in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (&OperatorKey, &OperatorEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &OperatorKey> {
        self.entries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn collision_count(&self) -> usize {
        self.collision_count
    }

    /// Log a single summary line if duplicate keys were overwritten during extraction.
    pub fn log_collision_summary(&self) {
        if self.collision_count > 0 {
            tracing::info!(
                collision_count = self.collision_count,
                "{} operator entries shared an (id, country) key with an earlier entry \
                 and were overwritten",
                self.collision_count
            );
        }
    }
}

impl<'a> IntoIterator for &'a ExtractedDirectory {
    type Item = (&'a OperatorKey, &'a OperatorEntry);
    type IntoIter = indexmap::map::Iter<'a, OperatorKey, OperatorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(OperatorKey, OperatorEntry)> for ExtractedDirectory {
    fn from_iter<I: IntoIterator<Item = (OperatorKey, OperatorEntry)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (key, entry) in iter {
            directory.insert(key, entry);
        }
        directory
    }
}
