//! Fuzzy rename detection over exact-match leftovers.

use super::traits::{NameMatcher, Residual};
use super::FuzzyMatch;
use crate::model::{OperatorEntry, OperatorKey};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// Configuration for the fuzzy pass.
///
/// The defaults reproduce plain, case-sensitive substring containment with
/// no length floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyMatchConfig {
    /// Run the fuzzy pass at all
    pub enabled: bool,
    /// Compare names case-insensitively
    pub ignore_case: bool,
    /// Skip names shorter than this many characters (0 = no floor)
    pub min_name_length: usize,
}

impl Default for FuzzyMatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ignore_case: false,
            min_name_length: 0,
        }
    }
}

impl FuzzyMatchConfig {
    /// Configuration with the fuzzy pass switched off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    #[must_use]
    pub const fn with_min_name_length(mut self, min_name_length: usize) -> Self {
        self.min_name_length = min_name_length;
        self
    }
}

/// Substring containment in either direction, excluding identical names.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher {
    ignore_case: bool,
}

impl SubstringMatcher {
    #[must_use]
    pub const fn new() -> Self {
        Self { ignore_case: false }
    }

    #[must_use]
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

impl NameMatcher for SubstringMatcher {
    fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.ignore_case {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        }
    }

    fn is_match(&self, old_name: &str, new_name: &str) -> bool {
        old_name != new_name && (new_name.contains(old_name) || old_name.contains(new_name))
    }

    fn name(&self) -> &'static str {
        "SubstringMatcher"
    }
}

/// Cross-matches residual baseline entries against residual candidate entries.
///
/// Every pair is tested (baseline order outer, candidate order inner) and
/// every qualifying pair is reported; there is no ranking between candidates
/// for the same baseline entry. A given (old id, new id) pair is reported at
/// most once even when several country combinations produce it.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: FuzzyMatchConfig,
}

impl FuzzyMatcher {
    #[must_use]
    pub const fn new(config: FuzzyMatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &FuzzyMatchConfig {
        &self.config
    }

    /// Find fuzzy matches between the two residual sets using `matcher`.
    #[must_use]
    pub fn find_matches(
        &self,
        baseline: &Residual<'_>,
        candidate: &Residual<'_>,
        matcher: &dyn NameMatcher,
    ) -> Vec<FuzzyMatch> {
        if !self.config.enabled {
            return Vec::new();
        }

        let old_side = self.prepare(baseline, matcher);
        let new_side = self.prepare(candidate, matcher);

        let mut matches = Vec::new();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        for (old_key, old_entry, old_norm) in &old_side {
            for (new_key, new_entry, new_norm) in &new_side {
                if !matcher.is_match(old_norm, new_norm) {
                    continue;
                }
                if seen.insert((old_key.id.as_str(), new_key.id.as_str())) {
                    matches.push(FuzzyMatch {
                        old_id: old_key.id.clone(),
                        new_id: new_key.id.clone(),
                        old_name: old_entry.name.clone(),
                        new_name: new_entry.name.clone(),
                        country_code: old_entry.country_code.clone(),
                    });
                }
            }
        }

        tracing::debug!(
            matcher = matcher.name(),
            baseline = baseline.len(),
            candidate = candidate.len(),
            matches = matches.len(),
            "fuzzy pass complete"
        );

        matches
    }

    /// Drop names below the length floor and normalize the rest once.
    fn prepare<'a>(
        &self,
        residual: &Residual<'a>,
        matcher: &dyn NameMatcher,
    ) -> Vec<(&'a OperatorKey, &'a OperatorEntry, Cow<'a, str>)> {
        residual
            .iter()
            .filter(|(_, entry)| !self.too_short(&entry.name))
            .map(|(key, entry)| (key, entry, matcher.normalize(&entry.name)))
            .collect()
    }

    fn too_short(&self, name: &str) -> bool {
        self.config.min_name_length > 0 && name.chars().count() < self.config.min_name_length
    }
}
