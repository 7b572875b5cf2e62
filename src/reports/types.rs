//! Report type definitions.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// The differences document as JSON
    #[default]
    Json,
    /// Brief summary output
    Summary,
    /// Aligned table for terminal (colored)
    Table,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Maximum rows per category (table output)
    pub max_items: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Attach metadata describing the compared snapshots.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Limit the number of rows per category.
    #[must_use]
    pub const fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

/// Where the compared snapshots came from.
#[derive(Debug, Clone, Default)]
pub struct ReportMetadata {
    /// Display label of the baseline snapshot
    pub baseline: Option<String>,
    /// Display label of the candidate snapshot
    pub candidate: Option<String>,
    /// Operators in the baseline directory
    pub baseline_operators: Option<usize>,
    /// Operators in the candidate directory
    pub candidate_operators: Option<usize>,
    /// When the report was produced
    pub generated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value_names() {
        for format in ReportFormat::value_variants() {
            let value = format.to_possible_value().unwrap();
            assert_eq!(value.get_name(), format.to_string());
        }
    }

    #[test]
    fn test_format_serde_lowercase() {
        let json = serde_json::to_string(&ReportFormat::Summary).unwrap();
        assert_eq!(json, "\"summary\"");
    }
}
