//! Raw snapshot documents as published by the summary endpoint.
//!
//! These types mirror the wire shape
//! `{ summary: [ { countryCode, operators?: [ { id, name } ] } ] }`
//! and are read-only input to the diff engine.

use serde::{Deserialize, Deserializer, Serialize};

/// One full directory of countries and their operators at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Country records in document order
    pub summary: Vec<CountryRecord>,
}

impl RawSnapshot {
    /// Create a snapshot from country records.
    #[must_use]
    pub const fn new(summary: Vec<CountryRecord>) -> Self {
        Self { summary }
    }

    /// Number of country records.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.summary.len()
    }

    /// Number of operator records across all countries, duplicates included.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        self.summary
            .iter()
            .map(|c| c.operators.as_ref().map_or(0, Vec::len))
            .sum()
    }
}

/// A country and the operators listed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO country code. Numeric codes are accepted and kept in decimal form.
    #[serde(deserialize_with = "string_or_number")]
    pub country_code: String,
    /// `None` when the field is absent or is not an array.
    #[serde(
        default,
        deserialize_with = "lenient_operators",
        skip_serializing_if = "Option::is_none"
    )]
    pub operators: Option<Vec<OperatorRecord>>,
}

impl CountryRecord {
    /// Create a country record with the given operators.
    pub fn new(country_code: impl Into<String>, operators: Vec<OperatorRecord>) -> Self {
        Self {
            country_code: country_code.into(),
            operators: Some(operators),
        }
    }

    /// Create a country record with no `operators` field.
    pub fn without_operators(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            operators: None,
        }
    }
}

/// A single operator as listed in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    /// Operator identifier. Numeric ids are accepted and kept in decimal form.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name
    pub name: String,
}

impl OperatorRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Accept an array of operators; anything else counts as "no operators".
fn lenient_operators<'de, D>(deserializer: D) -> Result<Option<Vec<OperatorRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(number_to_key(&n)),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Decimal form of a JSON number as it appears in a key.
///
/// Integral floats drop the fractional part (`1.0` and `1e3` become `"1"` and
/// `"1000"`), and negative zero is `"0"`.
fn number_to_key(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
