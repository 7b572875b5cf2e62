//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::{DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_TIMEOUT_SECS};
use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".operator-diff.yaml",
    ".operator-diff.yml",
    "operator-diff.yaml",
    "operator-diff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/operator-diff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_dirs()
        .into_iter()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched for a config file, in order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        found.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        found.push(git_root);
    }
    if let Some(config_dir) = dirs::config_dir() {
        found.push(config_dir.join("operator-diff"));
    }
    if let Some(home) = dirs::home_dir() {
        found.push(home);
    }
    found
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values in `other` that differ from the defaults override; this is
    /// how CLI args are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        // Matching config
        if !other.matching.fuzzy {
            self.matching.fuzzy = false;
        }
        if other.matching.ignore_case {
            self.matching.ignore_case = true;
        }
        if other.matching.min_name_length != 0 {
            self.matching.min_name_length = other.matching.min_name_length;
        }

        // Source config
        if other.source.api_base != DEFAULT_API_BASE {
            self.source.api_base.clone_from(&other.source.api_base);
        }
        if other.source.api_key_env != DEFAULT_API_KEY_ENV {
            self.source.api_key_env.clone_from(&other.source.api_key_env);
        }
        if other.source.timeout_secs != DEFAULT_TIMEOUT_SECS {
            self.source.timeout_secs = other.source.timeout_secs;
        }
        if other.source.save_to.is_some() {
            self.source.save_to.clone_from(&other.source.save_to);
        }

        // Output config - only override if explicitly set
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
        if other.output.pretty {
            self.output.pretty = true;
        }
        if other.output.max_items.is_some() {
            self.output.max_items = other.output.max_items;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Operator Directory Diff Configuration
# Place this file at .operator-diff.yaml in your project root or ~/.config/operator-diff/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Operator Directory Diff Configuration File
# ============================================
#
# This file configures operator-diff behavior. Place it at:
#   - .operator-diff.yaml in your project root
#   - ~/.config/operator-diff/operator-diff.yaml for global config
#
# CLI arguments always override file settings.

# Fuzzy rename detection
matching:
  # Run the fuzzy pass over unmatched entries
  fuzzy: true
  # Compare names case-insensitively
  ignore_case: false
  # Ignore names shorter than this many characters (0 disables)
  min_name_length: 0

# Remote candidate source
source:
  # Summary endpoint URL
  api_base: https://api.tomtom.com/epp/bulkaccess/api/summary
  # Environment variable holding the API key (never put the key itself here)
  api_key_env: OPERATOR_DIFF_API_KEY
  # Request timeout in seconds
  timeout_secs: 30
  # Keep a copy of the fetched snapshot
  # save_to: responseNew.json

# Output configuration
output:
  # Format: json, summary, table
  # format: json
  # Output file path (omit for stdout)
  # file: differences.json
  # Disable colored output
  no_color: false
  # Pretty-print JSON
  pretty: false
  # Maximum table rows per category (omit for all)
  # max_items: 50

# Behavior flags
behavior:
  # Exit with code 1 if any changes detected
  fail_on_change: false
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
