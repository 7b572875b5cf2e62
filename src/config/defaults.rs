//! Default values shared by configuration and the fetch client.

/// Default location of the bulk-access summary endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.tomtom.com/epp/bulkaccess/api/summary";

/// Environment variable consulted for the API key when `--api-key` is absent.
pub const DEFAULT_API_KEY_ENV: &str = "OPERATOR_DIFF_API_KEY";

/// Request timeout for the summary endpoint, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
