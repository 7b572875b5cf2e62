//! Summary and table report generators for shell output.
//!
//! Provides compact, human-readable output for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DifferenceReport;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a name column may grow before values are truncated.
const MAX_NAME_WIDTH: usize = 40;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn source_line(&self, label: &str, name: Option<&str>, count: Option<usize>) -> Option<String> {
        let name = name?;
        let line = match count {
            Some(n) => format!(
                "{}  {} ({} {})",
                self.color(label, "cyan"),
                name,
                n,
                plural(n, "operator", "operators")
            ),
            None => format!("{}  {}", self.color(label, "cyan"), name),
        };
        Some(line)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        report: &DifferenceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let meta = &config.metadata;
        let summary = report.summary();
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Operator Directory Diff", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let sources = [
            self.source_line("Baseline: ", meta.baseline.as_deref(), meta.baseline_operators),
            self.source_line("Candidate:", meta.candidate.as_deref(), meta.candidate_operators),
        ];
        let has_sources = sources.iter().any(Option::is_some);
        lines.extend(sources.into_iter().flatten());
        if let Some(at) = meta.generated_at {
            lines.push(format!("{}  {}", self.color("Generated:", "cyan"), at.to_rfc3339()));
        }
        if has_sources || meta.generated_at.is_some() {
            lines.push(String::new());
        }

        // Changes
        lines.push(self.color("Changes:", "bold"));

        let rows = [
            (summary.name_changed, "~", "yellow", "renamed (same id)", "renamed (same id)"),
            (summary.id_changed, "*", "yellow", "re-keyed (same name)", "re-keyed (same name)"),
            (summary.added, "+", "green", "operator added", "operators added"),
            (summary.removed, "-", "red", "operator removed", "operators removed"),
        ];
        for (count, sign, color, one, many) in rows {
            if count > 0 {
                lines.push(format!(
                    "  {} {}",
                    self.color(&format!("{sign}{count}"), color),
                    plural(count, one, many)
                ));
            }
        }
        if !report.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        if summary.fuzzy_matches > 0 {
            lines.push(String::new());
            lines.push(self.color("Possible renames:", "bold"));
            lines.push(format!(
                "  {} {}",
                self.color(&format!("?{}", summary.fuzzy_matches), "cyan"),
                plural(summary.fuzzy_matches, "fuzzy match", "fuzzy matches")
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Total: {} {}, {} {}",
            summary.total_changes,
            plural(summary.total_changes, "change", "changes"),
            summary.fuzzy_matches,
            plural(summary.fuzzy_matches, "fuzzy match", "fuzzy matches")
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for aligned terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// One table row before layout: status label, its color, and the cells.
struct Row {
    status: &'static str,
    color: &'static str,
    cells: [String; 5],
}

const HEADERS: [&str; 6] = ["STATUS", "COUNTRY", "OLD ID", "NEW ID", "OLD NAME", "NEW NAME"];

fn collect_rows(report: &DifferenceReport, max_items: Option<usize>) -> (Vec<Row>, usize) {
    let limit = max_items.unwrap_or(usize::MAX);
    let mut rows = Vec::new();
    let mut hidden = 0;

    let mut push_section = |section: Vec<Row>| {
        hidden += section.len().saturating_sub(limit);
        rows.extend(section.into_iter().take(limit));
    };

    push_section(
        report
            .same_id_name_changed
            .iter()
            .map(|c| Row {
                status: "~ Renamed",
                color: "yellow",
                cells: [
                    c.country_code.clone(),
                    c.id.clone(),
                    c.id.clone(),
                    c.old_name.clone(),
                    c.new_name.clone(),
                ],
            })
            .collect(),
    );
    push_section(
        report
            .id_changed_name_same
            .iter()
            .map(|c| Row {
                status: "* Re-keyed",
                color: "yellow",
                cells: [
                    c.country_code.clone(),
                    c.old_id.clone(),
                    c.new_id.clone(),
                    c.name.clone(),
                    c.name.clone(),
                ],
            })
            .collect(),
    );
    push_section(
        report
            .added
            .iter()
            .map(|c| Row {
                status: "+ Added",
                color: "green",
                cells: [
                    c.country_code.clone(),
                    "-".to_string(),
                    c.id.clone(),
                    "-".to_string(),
                    c.name.clone(),
                ],
            })
            .collect(),
    );
    push_section(
        report
            .removed
            .iter()
            .map(|c| Row {
                status: "- Removed",
                color: "red",
                cells: [
                    c.country_code.clone(),
                    c.id.clone(),
                    "-".to_string(),
                    c.name.clone(),
                    "-".to_string(),
                ],
            })
            .collect(),
    );
    push_section(
        report
            .fuzzy_matches
            .iter()
            .map(|m| Row {
                status: "? Fuzzy",
                color: "cyan",
                cells: [
                    m.country_code.clone(),
                    m.old_id.clone(),
                    m.new_id.clone(),
                    m.old_name.clone(),
                    m.new_name.clone(),
                ],
            })
            .collect(),
    );

    (rows, hidden)
}

impl ReportGenerator for TableReporter {
    fn generate_diff_report(
        &self,
        report: &DifferenceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let (mut rows, hidden) = collect_rows(report, config.max_items);
        for row in &mut rows {
            for cell in &mut row.cells[3..] {
                *cell = truncate(cell, MAX_NAME_WIDTH);
            }
        }

        let mut widths: [usize; 6] = HEADERS.map(|h| h.width());
        for row in &rows {
            widths[0] = widths[0].max(row.status.width());
            for (i, cell) in row.cells.iter().enumerate() {
                widths[i + 1] = widths[i + 1].max(cell.width());
            }
        }

        let mut lines = Vec::new();
        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| self.color(&pad(h, w), "bold"))
            .collect();
        lines.push(header.join(" ").trim_end().to_string());
        lines.push("─".repeat(widths.iter().sum::<usize>() + widths.len() - 1));

        for row in &rows {
            let mut cells = Vec::with_capacity(6);
            cells.push(self.color(&pad(row.status, widths[0]), row.color));
            for (i, cell) in row.cells.iter().enumerate() {
                cells.push(pad(cell, widths[i + 1]));
            }
            lines.push(cells.join(" ").trim_end().to_string());
        }
        if hidden > 0 {
            lines.push(self.color(&format!("... {hidden} more rows not shown"), "dim"));
        }

        let summary = report.summary();
        lines.push(String::new());
        lines.push(format!(
            "Total: {} renamed, {} re-keyed, {} added, {} removed | Fuzzy: {}",
            summary.name_changed,
            summary.id_changed,
            summary.added,
            summary.removed,
            summary.fuzzy_matches
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Left-align `s` in a column of `width` terminal cells.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Truncate a string to fit within `max_width` terminal cells
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{FuzzyMatch, NameChange, OperatorChange};

    fn sample() -> DifferenceReport {
        DifferenceReport {
            same_id_name_changed: vec![NameChange {
                id: "1".into(),
                old_name: "Acme".into(),
                new_name: "Acme Wireless".into(),
                country_code: "US".into(),
            }],
            added: vec![OperatorChange {
                id: "7".into(),
                name: "Télé Mobile".into(),
                country_code: "FR".into(),
            }],
            removed: vec![OperatorChange {
                id: "3".into(),
                name: "Bell".into(),
                country_code: "CA".into(),
            }],
            fuzzy_matches: vec![FuzzyMatch {
                old_id: "3".into(),
                new_id: "7".into(),
                old_name: "Tel".into(),
                new_name: "Telco".into(),
                country_code: "CA".into(),
            }],
            ..DifferenceReport::new()
        }
    }

    #[test]
    fn test_summary_counts() {
        let out = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&sample(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("~1 renamed (same id)"));
        assert!(out.contains("+1 operator added"));
        assert!(out.contains("-1 operator removed"));
        assert!(out.contains("?1 fuzzy match"));
        assert!(out.contains("Total: 3 changes, 1 fuzzy match"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_summary_no_changes() {
        let out = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&DifferenceReport::new(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("No changes"));
    }

    #[test]
    fn test_summary_shows_sources() {
        let config = ReportConfig::default().with_metadata(super::super::ReportMetadata {
            baseline: Some("old.json".into()),
            baseline_operators: Some(1),
            candidate: Some("new.json".into()),
            candidate_operators: Some(2),
            generated_at: None,
        });
        let out = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&sample(), &config)
            .unwrap();
        assert!(out.contains("old.json (1 operator)"));
        assert!(out.contains("new.json (2 operators)"));
    }

    #[test]
    fn test_summary_colored() {
        let out = SummaryReporter::new()
            .generate_diff_report(&sample(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("\x1b[32m+1\x1b[0m"));
    }

    #[test]
    fn test_table_columns_align_on_display_width() {
        let out = TableReporter::new()
            .no_color()
            .generate_diff_report(&sample(), &ReportConfig::default())
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("STATUS"));

        // The OLD NAME column starts at the same display offset on every row.
        let offset = |line: &str, needle: &str| line[..line.find(needle).unwrap()].width();
        let header_offset = offset(lines[0], "OLD NAME");
        let renamed = lines.iter().find(|l| l.starts_with("~ Renamed")).unwrap();
        assert_eq!(offset(renamed, "Acme"), header_offset);
        let added = lines.iter().find(|l| l.starts_with("+ Added")).unwrap();
        assert!(added.contains("Télé Mobile"));
        assert!(out.contains("Total: 1 renamed, 0 re-keyed, 1 added, 1 removed | Fuzzy: 1"));
    }

    #[test]
    fn test_table_max_items() {
        let mut report = sample();
        report.added = (0..5)
            .map(|i| OperatorChange {
                id: i.to_string(),
                name: format!("Op {i}"),
                country_code: "US".into(),
            })
            .collect();
        let out = TableReporter::new()
            .no_color()
            .generate_diff_report(&report, &ReportConfig::default().with_max_items(2))
            .unwrap();
        assert_eq!(out.lines().filter(|l| l.starts_with("+ Added")).count(), 2);
        assert!(out.contains("... 3 more rows not shown"));
    }

    #[test]
    fn test_truncate_respects_width() {
        assert_eq!(truncate("short", 10), "short");
        let long = "x".repeat(50);
        let cut = truncate(&long, 10);
        assert_eq!(cut.width(), 10);
        assert!(cut.ends_with("..."));
        // Wide characters occupy two cells each.
        assert_eq!(truncate("日本語テキスト", 7).width(), 7);
    }
}
