//! Operator extraction: flatten a nested snapshot into a keyed directory.

use crate::model::{ExtractedDirectory, OperatorEntry, OperatorKey, RawSnapshot};

/// Flatten `snapshot` into a directory keyed by (operator id, country code).
///
/// Countries without an operator list contribute nothing. When two operators
/// share a key the later one wins.
#[must_use]
pub fn extract_operators(snapshot: &RawSnapshot) -> ExtractedDirectory {
    let mut directory = ExtractedDirectory::new();

    for country in &snapshot.summary {
        let Some(operators) = &country.operators else {
            continue;
        };
        for operator in operators {
            directory.insert(
                OperatorKey::new(operator.id.clone(), country.country_code.clone()),
                OperatorEntry::new(operator.name.clone(), country.country_code.clone()),
            );
        }
    }

    directory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryRecord, OperatorRecord};

    #[test]
    fn test_extract_keys_include_country() {
        let snapshot = RawSnapshot::new(vec![
            CountryRecord::new("US", vec![OperatorRecord::new("1", "Acme")]),
            CountryRecord::new("CA", vec![OperatorRecord::new("1", "Acme")]),
        ]);
        let dir = extract_operators(&snapshot);

        assert_eq!(dir.len(), 2);
        assert_eq!(
            dir.get(&OperatorKey::new("1", "CA")),
            Some(&OperatorEntry::new("Acme", "CA"))
        );
    }

    #[test]
    fn test_extract_last_write_wins() {
        let snapshot = RawSnapshot::new(vec![CountryRecord::new(
            "US",
            vec![
                OperatorRecord::new("1", "Acme"),
                OperatorRecord::new("1", "Acme Wireless"),
            ],
        )]);
        let dir = extract_operators(&snapshot);

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.collision_count(), 1);
        assert_eq!(dir.get(&OperatorKey::new("1", "US")).unwrap().name, "Acme Wireless");
    }

    #[test]
    fn test_extract_skips_missing_operator_lists() {
        let snapshot = RawSnapshot::new(vec![
            CountryRecord::without_operators("FR"),
            CountryRecord::new("DE", vec![]),
        ]);
        assert!(extract_operators(&snapshot).is_empty());
    }

    #[test]
    fn test_names_with_underscores_survive() {
        let snapshot = RawSnapshot::new(vec![CountryRecord::new(
            "GB",
            vec![OperatorRecord::new("a_b", "Three_UK")],
        )]);
        let dir = extract_operators(&snapshot);
        let (key, entry) = dir.iter().next().unwrap();
        assert_eq!(key.id, "a_b");
        assert_eq!(entry.name, "Three_UK");
    }
}
