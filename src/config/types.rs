//! Configuration types for operator-diff operations.
//!
//! Provides structured configuration for diff and fetch operations.

use super::defaults::{DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_TIMEOUT_SECS};
use crate::diff::FuzzyMatchConfig;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Fuzzy matching configuration
    pub matching: MatchingConfig,
    /// Where the candidate snapshot is fetched from
    pub source: SourceConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Turn the effective configuration into a diff configuration.
    #[must_use]
    pub fn into_diff_config(self, paths: DiffPaths, api_key: Option<String>) -> DiffConfig {
        DiffConfig {
            paths,
            output: self.output,
            matching: self.matching,
            source: self.source,
            behavior: self.behavior,
            api_key,
        }
    }

    /// Turn the effective configuration into a fetch configuration.
    ///
    /// `output.file` names the diff report and is not used here; the fetched
    /// body goes to `output_file` or stdout.
    #[must_use]
    pub fn into_fetch_config(
        self,
        output_file: Option<PathBuf>,
        api_key: Option<String>,
    ) -> FetchConfig {
        FetchConfig {
            source: self.source,
            output_file,
            quiet: self.behavior.quiet,
            api_key,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Compare names case-insensitively in the fuzzy pass.
    pub const fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.config.matching.ignore_case = ignore_case;
        self
    }

    /// Skip names shorter than `len` characters in the fuzzy pass.
    pub const fn min_name_length(mut self, len: usize) -> Self {
        self.config.matching.min_name_length = len;
        self
    }

    /// Enable or disable the fuzzy pass.
    pub const fn fuzzy(mut self, enabled: bool) -> Self {
        self.config.matching.fuzzy = enabled;
        self
    }

    /// Set the summary endpoint URL.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.config.source.api_base = api_base.into();
        self
    }

    /// Set the request timeout in seconds.
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.source.timeout_secs = secs;
        self
    }

    /// Persist fetched candidate bodies to this path.
    pub fn save_to(mut self, path: Option<PathBuf>) -> Self {
        self.config.source.save_to = path;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = Some(format);
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Pretty-print JSON output.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Limit table rows per category.
    pub const fn max_items(mut self, max_items: Option<usize>) -> Self {
        self.config.output.max_items = max_items;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Snapshots to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Matching configuration
    pub matching: MatchingConfig,
    /// Remote source, used when no candidate path is given
    pub source: SourceConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// API key for the remote source
    pub api_key: Option<String>,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the baseline snapshot
    pub baseline: PathBuf,
    /// Path to the candidate snapshot; `None` fetches it from the remote source
    pub candidate: Option<PathBuf>,
}

/// Configuration for fetch operations
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Remote source
    pub source: SourceConfig,
    /// API key for the remote source
    pub api_key: Option<String>,
    /// Where to write the fetched body (stdout if not specified)
    pub output_file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Fuzzy matching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Run the fuzzy rename pass
    pub fuzzy: bool,
    /// Compare names case-insensitively in the fuzzy pass
    pub ignore_case: bool,
    /// Skip names shorter than this many characters in the fuzzy pass (0 disables)
    pub min_name_length: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy: true,
            ignore_case: false,
            min_name_length: 0,
        }
    }
}

impl MatchingConfig {
    /// Convert to the engine's `FuzzyMatchConfig`
    #[must_use]
    pub fn to_fuzzy_config(&self) -> FuzzyMatchConfig {
        FuzzyMatchConfig {
            enabled: self.fuzzy,
            ignore_case: self.ignore_case,
            min_name_length: self.min_name_length,
        }
    }
}

/// Remote snapshot source configuration.
///
/// The API key itself is never stored here; it is read from the
/// environment variable named by `api_key_env` or passed on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SourceConfig {
    /// Summary endpoint URL
    pub api_base: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
    /// Persist the fetched candidate body to this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_to: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            save_to: None,
        }
    }
}

impl SourceConfig {
    /// Pick the explicit key if given, else read the configured environment variable.
    ///
    /// Empty values count as absent.
    #[must_use]
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.is_empty())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (json if not specified)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Maximum table rows per category (None for all)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl OutputConfig {
    /// The format to render with.
    #[must_use]
    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    baseline: Option<PathBuf>,
    candidate: Option<PathBuf>,
    output: OutputConfig,
    matching: MatchingConfig,
    source: SourceConfig,
    behavior: BehaviorConfig,
    api_key: Option<String>,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn baseline_path(mut self, path: PathBuf) -> Self {
        self.baseline = Some(path);
        self
    }

    #[must_use]
    pub fn candidate_path(mut self, path: PathBuf) -> Self {
        self.candidate = Some(path);
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = Some(format);
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.output.pretty = pretty;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn max_items(mut self, max_items: Option<usize>) -> Self {
        self.output.max_items = max_items;
        self
    }

    #[must_use]
    pub fn matching(mut self, matching: MatchingConfig) -> Self {
        self.matching = matching;
        self
    }

    #[must_use]
    pub fn source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let baseline = self
            .baseline
            .ok_or_else(|| anyhow::anyhow!("baseline path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths {
                baseline,
                candidate: self.candidate,
            },
            output: self.output,
            matching: self.matching,
            source: self.source,
            behavior: self.behavior,
            api_key: self.api_key,
        })
    }
}
