//! Client configuration: compiled-in defaults, overlaid by environment variables,
//! overlaid by whatever the front-end passes explicitly.

use std::time::Duration;

/// Public REST Countries endpoint. `fields` is required by the service for `/all`.
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=name,region,population,area,borders,languages,timezones";

/// Environment variable overriding [`ClientConfig::endpoint`].
pub const ENV_ENDPOINT: &str = "COUNTRIES_API_URL";
/// Environment variable overriding [`ClientConfig::timeout`] (seconds).
pub const ENV_TIMEOUT_SECS: &str = "COUNTRIES_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Total request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
    /// Honour `HTTP(S)_PROXY` / `NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: concat!("countries_rs/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Defaults with `COUNTRIES_API_URL` / `COUNTRIES_TIMEOUT_SECS` applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(ENV_ENDPOINT).ok(),
            std::env::var(ENV_TIMEOUT_SECS)
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok()),
        )
    }

    /// Replace the endpoint and/or total timeout. Blank endpoints and zero timeouts are ignored.
    pub fn with_overrides(mut self, endpoint: Option<String>, timeout_secs: Option<u64>) -> Self {
        if let Some(e) = endpoint.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) {
            self.endpoint = e;
        }
        if let Some(t) = timeout_secs.filter(|t| *t > 0) {
            self.timeout = Duration::from_secs(t);
        }
        self
    }
}
