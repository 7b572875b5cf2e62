//! Configuration validation for operator-diff.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{
    AppConfig, BehaviorConfig, DiffConfig, FetchConfig, MatchingConfig, OutputConfig, SourceConfig,
};
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.source.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Any length floor is meaningful, 0 disables it.
        Vec::new()
    }
}

impl Validatable for SourceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.timeout_secs == 0 {
            errors.push(ConfigError {
                field: "source.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            errors.push(ConfigError {
                field: "source.api_base".to_string(),
                message: format!(
                    "API base must start with http:// or https://, got '{}'",
                    self.api_base
                ),
            });
        }

        if self.api_key_env.trim().is_empty() {
            errors.push(ConfigError {
                field: "source.api_key_env".to_string(),
                message: "API key environment variable name must not be empty".to_string(),
            });
        }

        if let Some(ref save_to) = self.save_to {
            if let Some(error) = check_parent_exists("source.save_to", save_to) {
                errors.push(error);
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file {
            if let Some(error) = check_parent_exists("output.file", file_path) {
                errors.push(error);
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // BehaviorConfig contains only boolean flags that don't need validation
        Vec::new()
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.paths.baseline.exists() {
            errors.push(ConfigError {
                field: "paths.baseline".to_string(),
                message: format!("File not found: {}", self.paths.baseline.display()),
            });
        }
        match self.paths.candidate {
            Some(ref candidate) => {
                if !candidate.exists() {
                    errors.push(ConfigError {
                        field: "paths.candidate".to_string(),
                        message: format!("File not found: {}", candidate.display()),
                    });
                }
            }
            // The candidate comes from the remote source.
            None => errors.extend(self.source.validate()),
        }

        errors.extend(self.matching.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for FetchConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.source.validate();
        if let Some(ref file_path) = self.output_file {
            if let Some(error) = check_parent_exists("output.file", file_path) {
                errors.push(error);
            }
        }
        errors
    }
}

fn check_parent_exists(field: &str, path: &Path) -> Option<ConfigError> {
    let parent = path.parent()?;
    if parent.as_os_str().is_empty() || parent.exists() {
        return None;
    }
    Some(ConfigError {
        field: field.to_string(),
        message: format!("Parent directory does not exist: {}", parent.display()),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiffConfigBuilder, DiffPaths};
    use std::path::PathBuf;

    #[test]
    fn test_source_config_validation() {
        assert!(SourceConfig::default().is_valid());

        let zero_timeout = SourceConfig {
            timeout_secs: 0,
            ..SourceConfig::default()
        };
        let errors = zero_timeout.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "source.timeout_secs");

        let bad_scheme = SourceConfig {
            api_base: "ftp://example.com".to_string(),
            ..SourceConfig::default()
        };
        assert!(!bad_scheme.is_valid());
    }

    #[test]
    fn test_output_config_validation() {
        let valid = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(valid.is_valid());

        let invalid = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_diff_config_missing_files() {
        let config = DiffConfigBuilder::new()
            .baseline_path(PathBuf::from("/nonexistent/old.json"))
            .candidate_path(PathBuf::from("/nonexistent/new.json"))
            .build()
            .unwrap();
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["paths.baseline", "paths.candidate"]);
    }

    #[test]
    fn test_diff_config_remote_candidate_checks_source() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut config = AppConfig::default().into_diff_config(
            DiffPaths {
                baseline: tmp.path().to_path_buf(),
                candidate: None,
            },
            None,
        );
        assert!(config.is_valid());

        config.source.timeout_secs = 0;
        assert!(!config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "test_field".to_string(),
            message: "test error message".to_string(),
        };
        assert_eq!(error.to_string(), "test_field: test error message");
    }

    #[test]
    fn test_app_config_validation() {
        let valid = AppConfig::default();
        assert!(valid.is_valid());

        let mut invalid = AppConfig::default();
        invalid.source.api_base = "localhost".to_string();
        assert!(!invalid.is_valid());
    }
}
