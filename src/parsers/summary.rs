//! Parser for summary snapshot documents.

use crate::error::{ErrorContext, OperatorDiffError, Result};
use crate::model::{CountryRecord, RawSnapshot};
use serde_json::Value;

/// Parse a snapshot from an already-decoded JSON value.
///
/// The `summary` field is the input contract: it must exist and be an array.
/// Each element must be a country record with a `countryCode`; its
/// `operators` field may be absent or malformed, which counts as zero
/// operators.
pub fn parse_snapshot_value(value: Value) -> Result<RawSnapshot> {
    let mut root = match value {
        Value::Object(root) => root,
        other => {
            return Err(OperatorDiffError::invalid_value(
                "<root>",
                format!("expected a JSON object, found {}", json_type_name(&other)),
            ))
        }
    };

    let summary = root
        .remove("summary")
        .ok_or_else(|| OperatorDiffError::missing_field("summary", "snapshot root"))?;

    let countries = match summary {
        Value::Array(countries) => countries,
        other => {
            return Err(OperatorDiffError::invalid_value(
                "summary",
                format!("expected an array, found {}", json_type_name(&other)),
            ))
        }
    };

    let mut records = Vec::with_capacity(countries.len());
    for (index, country) in countries.into_iter().enumerate() {
        let record = parse_country(country).with_context(|| format!("summary[{index}]"))?;
        records.push(record);
    }

    Ok(RawSnapshot::new(records))
}

/// Parse a snapshot from JSON text.
pub fn parse_snapshot_str(content: &str) -> Result<RawSnapshot> {
    let value: Value = serde_json::from_str(content)?;
    parse_snapshot_value(value)
}

fn parse_country(value: Value) -> Result<CountryRecord> {
    match value.get("countryCode") {
        Some(Value::String(_) | Value::Number(_)) => {}
        Some(other) => {
            return Err(OperatorDiffError::invalid_value(
                "countryCode",
                format!("expected a string or number, found {}", json_type_name(other)),
            ))
        }
        None => return Err(OperatorDiffError::missing_field("countryCode", "country record")),
    }

    serde_json::from_value(value)
        .map_err(|e| OperatorDiffError::invalid_value("operators", e.to_string()))
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_parse_minimal_snapshot() {
        let snapshot = parse_snapshot_str(
            r#"{"summary":[{"countryCode":"US","operators":[{"id":"1","name":"Acme"}]}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.country_count(), 1);
        assert_eq!(snapshot.operator_count(), 1);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let snapshot = parse_snapshot_str(
            r#"{"version":3,"summary":[{"countryCode":"US","countryName":"United States",
                "operators":[{"id":"1","name":"Acme","mcc":"310"}]}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.operator_count(), 1);
    }

    #[test]
    fn test_missing_summary_fails_fast() {
        let err = parse_snapshot_str(r#"{"countries":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            OperatorDiffError::Parse {
                source: ParseErrorKind::MissingField { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_non_array_summary_fails_fast() {
        let err = parse_snapshot_str(r#"{"summary":{"countryCode":"US"}}"#).unwrap_err();
        match err {
            OperatorDiffError::Parse {
                source: ParseErrorKind::InvalidValue { field, message },
                ..
            } => {
                assert_eq!(field, "summary");
                assert!(message.contains("object"));
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_root_fails() {
        assert!(parse_snapshot_str("[]").is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_snapshot_str("{\"summary\": [").unwrap_err();
        assert!(matches!(
            err,
            OperatorDiffError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_country_without_code_reports_index() {
        let err = parse_snapshot_str(r#"{"summary":[{"countryCode":"US"},{"operators":[]}]}"#)
            .unwrap_err();
        match err {
            OperatorDiffError::Parse { context, .. } => {
                assert!(context.starts_with("summary[1]"), "{context}");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_operators_is_not_an_error() {
        let snapshot =
            parse_snapshot_str(r#"{"summary":[{"countryCode":"US"},{"countryCode":"FR","operators":5}]}"#)
                .unwrap();
        assert_eq!(snapshot.country_count(), 2);
        assert_eq!(snapshot.operator_count(), 0);
    }
}
