//! Summary endpoint HTTP client.

use crate::config::{SourceConfig, DEFAULT_API_BASE};
use crate::error::{FetchErrorKind, OperatorDiffError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

/// Summary client configuration.
#[derive(Debug, Clone)]
pub struct SummaryClientConfig {
    /// Endpoint URL; the API key is appended as the `key` query parameter
    pub api_base: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for SummaryClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl From<&SourceConfig> for SummaryClientConfig {
    fn from(source: &SourceConfig) -> Self {
        Self {
            api_base: source.api_base.clone(),
            timeout: Duration::from_secs(source.timeout_secs),
            ..Self::default()
        }
    }
}

/// HTTP client for the summary endpoint.
pub struct SummaryClient {
    client: Client,
    config: SummaryClientConfig,
}

/// Helper to convert reqwest errors to fetch errors
fn network_error(msg: &str, err: reqwest::Error) -> OperatorDiffError {
    OperatorDiffError::fetch(msg, FetchErrorKind::NetworkError(err.to_string()))
}

/// Helper to create API errors
fn api_error(msg: impl Into<String>) -> OperatorDiffError {
    OperatorDiffError::fetch("API request", FetchErrorKind::ApiError(msg.into()))
}

impl SummaryClient {
    /// Create a new summary client.
    pub fn new(config: SummaryClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Fetch the summary document and return the response body unparsed.
    pub fn fetch_raw(&self, api_key: &str) -> Result<String> {
        tracing::debug!("Requesting summary from {}", self.config.api_base);

        let response = self
            .client
            .get(&self.config.api_base)
            .query(&[("key", api_key)])
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| network_error("Failed to send summary request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(format!(
                "summary endpoint returned error status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body = response.text().map_err(|e| {
            OperatorDiffError::fetch(
                "reading response",
                FetchErrorKind::InvalidResponse(e.to_string()),
            )
        })?;

        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = SummaryClientConfig::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("operator-diff/"));
    }

    #[test]
    fn test_client_config_from_source() {
        let source = SourceConfig {
            api_base: "http://localhost:8080/summary".to_string(),
            timeout_secs: 5,
            ..SourceConfig::default()
        };
        let config = SummaryClientConfig::from(&source);
        assert_eq!(config.api_base, "http://localhost:8080/summary");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        let client = SummaryClient::new(SummaryClientConfig {
            api_base: "http://127.0.0.1:9/summary".to_string(),
            timeout: Duration::from_secs(2),
            ..SummaryClientConfig::default()
        })
        .unwrap();

        let err = client.fetch_raw("secret").unwrap_err();
        assert!(matches!(
            err,
            OperatorDiffError::Fetch {
                source: FetchErrorKind::NetworkError(_),
                ..
            }
        ));
    }
}
