//! Configuration module for operator-diff.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use operator_diff::config::AppConfig;
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .ignore_case(true)
//!     .fail_on_change(true)
//!     .build();
//!
//! // Load from file
//! use operator_diff::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.operator-diff.yaml` file in your project root or `~/.config/operator-diff/`:
//!
//! ```yaml
//! matching:
//!   min_name_length: 3
//! source:
//!   save_to: responseNew.json
//! behavior:
//!   fail_on_change: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_TIMEOUT_SECS};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffPaths,
    FetchConfig, MatchingConfig, OutputConfig, SourceConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, search_dirs, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.operator-diff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> crate::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::OperatorDiffError::config(format!("schema serialization: {e}")))
}
