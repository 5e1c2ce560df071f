//! Runtime configuration for the adapter.

use std::env;

/// Environment variable naming the backend base URL.
pub const ENV_BASE_URL: &str = "BOOKING_API_BASE_URL";

/// Stage URL of the deployed booking API, used when the environment does not
/// override it.
const DEFAULT_BASE_URL: &str = "https://1v8lhcb0v2.execute-api.eu-central-1.amazonaws.com/dev";

/// Configuration resolved once at startup and passed into the adapter.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub base_url: String,
}

impl AdapterConfig {
    /// Reads the configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Builds a configuration for an explicit backend endpoint. Trailing
    /// slashes are trimmed so URL formatting stays uniform.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}
