//! JSON report generator.
//!
//! Emits the differences document itself, with no envelope, so downstream
//! consumers see the same five keys whatever produced the report.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DifferenceReport;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter producing single-line output
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        report: &DifferenceReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
