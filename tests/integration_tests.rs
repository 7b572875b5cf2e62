//! Integration tests for operator-diff
//!
//! These tests verify end-to-end functionality of snapshot parsing, the
//! diff engine, and report generation.

use operator_diff::{
    compute_differences,
    diff::{
        extract_operators, DiffEngine, FuzzyMatch, FuzzyMatchConfig, IdChange, NameChange,
        OperatorChange,
    },
    parsers::{parse_snapshot, parse_snapshot_str},
    error::ParseErrorKind,
    OperatorDiffError, RawSnapshot,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn snapshot(json: &str) -> RawSnapshot {
    parse_snapshot_str(json).expect("valid snapshot")
}

fn change(id: &str, name: &str, country: &str) -> OperatorChange {
    OperatorChange {
        id: id.into(),
        name: name.into(),
        country_code: country.into(),
    }
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;

    #[test]
    fn test_parse_baseline_fixture() {
        let snap = parse_snapshot(&fixture_path("baseline.json")).expect("parse baseline");
        assert_eq!(snap.country_count(), 4);
        assert_eq!(snap.operator_count(), 6);
        assert!(snap.summary[2].operators.is_none());
        assert!(snap.summary[3].operators.is_none());
    }

    #[test]
    fn test_non_array_operators_count_as_none() {
        let snap = parse_snapshot(&fixture_path("candidate.json")).expect("parse candidate");
        let de = snap
            .summary
            .iter()
            .find(|c| c.country_code == "DE")
            .expect("DE present");
        assert!(de.operators.is_none());
    }

    #[test]
    fn test_missing_summary_is_an_error() {
        let err = parse_snapshot(&fixture_path("missing_summary.json")).unwrap_err();
        match err {
            OperatorDiffError::Parse {
                source: ParseErrorKind::MissingField { field, .. },
                ..
            } => assert_eq!(field, "summary"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = parse_snapshot(&fixture_path("malformed.json")).unwrap_err();
        assert!(matches!(err, OperatorDiffError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_snapshot(&fixture_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, OperatorDiffError::Io { .. }), "{err:?}");
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let snap = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":42,"name":"Acme"}]}]}"#);
        let dir = extract_operators(&snap);
        assert_eq!(dir.iter().next().map(|(k, _)| k.id.as_str()), Some("42"));
    }
}

// ============================================================================
// Diff Engine Tests
// ============================================================================

mod diff_tests {
    use super::*;

    #[test]
    fn test_example_same_id_name_changed() {
        let old = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#);
        let new = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme Corp"}]}]}"#);
        let report = compute_differences(&old, &new);

        assert_eq!(
            report.same_id_name_changed,
            vec![NameChange {
                id: "1".into(),
                old_name: "Acme".into(),
                new_name: "Acme Corp".into(),
                country_code: "US".into(),
            }]
        );
        assert!(report.id_changed_name_same.is_empty());
        assert!(report.added.is_empty());
        assert!(report.removed.is_empty());
        assert!(report.fuzzy_matches.is_empty());
    }

    #[test]
    fn test_example_id_changed_name_same() {
        let old = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#);
        let new = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"2","name":"Acme"}]}]}"#);
        let report = compute_differences(&old, &new);

        assert_eq!(
            report.id_changed_name_same,
            vec![IdChange {
                old_id: "1".into(),
                new_id: "2".into(),
                name: "Acme".into(),
                country_code: "US".into(),
            }]
        );
        // The old key has no candidate counterpart, so it is also reported removed.
        assert_eq!(report.removed, vec![change("1", "Acme", "US")]);
        assert!(report.added.is_empty());
        assert!(report.fuzzy_matches.is_empty());
    }

    #[test]
    fn test_example_fuzzy_rename() {
        let old = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#);
        let new = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"2","name":"Acme Corp"}]}]}"#);
        let report = compute_differences(&old, &new);

        assert_eq!(report.removed, vec![change("1", "Acme", "US")]);
        assert_eq!(report.added, vec![change("2", "Acme Corp", "US")]);
        assert_eq!(
            report.fuzzy_matches,
            vec![FuzzyMatch {
                old_id: "1".into(),
                new_id: "2".into(),
                old_name: "Acme".into(),
                new_name: "Acme Corp".into(),
                country_code: "US".into(),
            }]
        );
    }

    #[test]
    fn test_example_absent_operators() {
        let old = snapshot(r#"{"summary":[{"countryCode":"FR"}]}"#);
        let new = snapshot(r#"{"summary":[{"countryCode":"FR","operators":[]}]}"#);
        assert!(compute_differences(&old, &new).is_empty());
    }

    #[test]
    fn test_fixture_diff_categories() {
        let old = parse_snapshot(&fixture_path("baseline.json")).unwrap();
        let new = parse_snapshot(&fixture_path("candidate.json")).unwrap();
        let report = compute_differences(&old, &new);

        assert_eq!(report.same_id_name_changed.len(), 1);
        assert_eq!(report.same_id_name_changed[0].id, "1");

        assert_eq!(
            report.id_changed_name_same,
            vec![IdChange {
                old_id: "3".into(),
                new_id: "30".into(),
                name: "Cellco".into(),
                country_code: "US".into(),
            }]
        );

        assert_eq!(
            report.removed,
            vec![
                change("3", "Cellco", "US"),
                change("9", "Zeta", "US"),
                change("11", "Vodafone", "GB"),
            ]
        );
        assert_eq!(
            report.added,
            vec![change("40", "Zeta Wireless", "US"), change("12", "Three", "GB")]
        );

        assert_eq!(report.fuzzy_matches.len(), 1);
        assert_eq!(report.fuzzy_matches[0].old_id, "9");
        assert_eq!(report.fuzzy_matches[0].new_id, "40");

        let summary = report.summary();
        assert_eq!(summary.total_changes, 7);
        assert_eq!(summary.fuzzy_matches, 1);
        assert!(report.has_changes());
    }

    #[test]
    fn test_same_id_in_other_country_is_not_a_key_match() {
        let old = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#);
        let new = snapshot(r#"{"summary":[{"countryCode":"CA","operators":[{"id":"1","name":"Acme"}]}]}"#);
        let report = compute_differences(&old, &new);

        assert_eq!(report.removed, vec![change("1", "Acme", "US")]);
        assert_eq!(report.added, vec![change("1", "Acme", "CA")]);
        assert!(report.id_changed_name_same.is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let old = snapshot(
            r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"First"},{"id":"1","name":"Second"}]}]}"#,
        );
        let new = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Second"}]}]}"#);
        assert!(compute_differences(&old, &new).is_empty());
    }

    #[test]
    fn test_name_lookup_scans_full_baseline() {
        // "Acme"@US is key-matched (renamed) in the first pass but still
        // satisfies the name lookup for the new id 7.
        let old = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#);
        let new = snapshot(
            r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme Two"},{"id":"7","name":"Acme"}]}]}"#,
        );
        let report = compute_differences(&old, &new);

        assert_eq!(report.same_id_name_changed.len(), 1);
        assert_eq!(
            report.id_changed_name_same,
            vec![IdChange {
                old_id: "1".into(),
                new_id: "7".into(),
                name: "Acme".into(),
                country_code: "US".into(),
            }]
        );
        assert!(report.added.is_empty());
        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_diff_does_not_alter_inputs() {
        let old = parse_snapshot(&fixture_path("baseline.json")).unwrap();
        let new = parse_snapshot(&fixture_path("candidate.json")).unwrap();
        let (old_copy, new_copy) = (old.clone(), new.clone());

        let _ = compute_differences(&old, &new);
        assert_eq!(old, old_copy);
        assert_eq!(new, new_copy);
    }

    #[test]
    fn test_engine_ignore_case_finds_more_renames() {
        let old = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"acme"}]}]}"#);
        let new = snapshot(r#"{"summary":[{"countryCode":"US","operators":[{"id":"2","name":"ACME Mobile"}]}]}"#);

        assert!(compute_differences(&old, &new).fuzzy_matches.is_empty());

        let engine = DiffEngine::new()
            .with_fuzzy_config(FuzzyMatchConfig::default().with_ignore_case(true));
        let report = engine.diff(&old, &new);
        assert_eq!(report.fuzzy_matches.len(), 1);
        assert_eq!(report.fuzzy_matches[0].new_name, "ACME Mobile");
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;
    use operator_diff::reports::{create_reporter, ReportConfig, ReportFormat};

    #[test]
    fn test_json_wire_keys_in_order() {
        let old = parse_snapshot(&fixture_path("baseline.json")).unwrap();
        let new = parse_snapshot(&fixture_path("candidate.json")).unwrap();
        let report = compute_differences(&old, &new);

        let out = create_reporter(ReportFormat::Json)
            .generate_diff_report(&report, &ReportConfig::default())
            .unwrap();

        let positions: Vec<usize> = [
            "\"operatorIdSameNameChanged\"",
            "\"operatorIdChangedNameSame\"",
            "\"operatorNew\"",
            "\"operatorRemoved\"",
            "\"fuzzyMatches\"",
        ]
        .iter()
        .map(|key| out.find(key).expect("key present"))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["operatorIdChangedNameSame"][0]["oldId"], "3");
        assert_eq!(value["fuzzyMatches"][0]["countryCode"], "US");
    }

    #[test]
    fn test_every_format_renders() {
        let old = parse_snapshot(&fixture_path("baseline.json")).unwrap();
        let new = parse_snapshot(&fixture_path("candidate.json")).unwrap();
        let report = compute_differences(&old, &new);

        for format in [ReportFormat::Json, ReportFormat::Summary, ReportFormat::Table] {
            let out = create_reporter(format)
                .generate_diff_report(&report, &ReportConfig::default())
                .unwrap();
            assert!(!out.is_empty(), "{format} output should not be empty");
        }
    }
}
