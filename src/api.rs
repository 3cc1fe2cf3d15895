//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! One GET against a fixed endpoint returns every country; each entry is flattened into
//! a [`CountryRecord`]. There is no pagination and no retry: a non-200 status is reported
//! as [`FetchError::Status`] and the caller continues with an empty table.
//!
//! Typical usage:
//! ```no_run
//! # use countries_rs::Client;
//! let client = Client::default();
//! let rows = client.fetch()?;
//! println!("{} countries", rows.len());
//! # Ok::<(), countries_rs::FetchError>(())
//! ```

use crate::cache::FetchCache;
use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::models::CountryRecord;
use log::{debug, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default()).expect("reqwest client build")
    }
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let mut builder = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self { config, http })
    }

    /// The request URL; also the cache key for this client's results.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Fetch and flatten all country records.
    ///
    /// ### Errors
    /// - [`FetchError::Status`] for any status other than 200
    /// - [`FetchError::Transport`] when no response arrives
    /// - [`FetchError::Decode`] when the body is not a JSON array
    pub fn fetch(&self) -> Result<Vec<CountryRecord>, FetchError> {
        let url = self.endpoint();
        debug!("GET {url}");
        let resp = self.http.get(url).send()?;
        let status = resp.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status(status));
        }
        let body = resp.text()?;
        let rows = decode_response(status, &body)?;
        debug!("GET {url}: {} records", rows.len());
        Ok(rows)
    }

    /// Fetch, folding any failure into an empty [`LoadOutcome`] with an error message.
    pub fn load(&self) -> LoadOutcome {
        LoadOutcome::from_result(self.fetch())
    }

    /// Like [`Client::load`], but served from `cache` when this endpoint was already fetched.
    pub fn load_cached(&self, cache: &mut FetchCache) -> LoadOutcome {
        LoadOutcome::from_result(cache.get_or_try_fetch(self.endpoint(), || self.fetch()))
    }
}

/// Turn a status + body into records. Only status 200 counts as success.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<CountryRecord>, FetchError> {
    if status != 200 {
        return Err(FetchError::Status(status));
    }
    parse_countries(body)
}

/// Parse a REST Countries JSON array. Elements are extracted best-effort.
pub fn parse_countries(body: &str) -> Result<Vec<CountryRecord>, FetchError> {
    let v: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let arr = v
        .as_array()
        .ok_or_else(|| FetchError::Decode("not a top-level array".into()))?;
    Ok(arr.iter().map(CountryRecord::from_value).collect())
}

/// Result of a load as the front-ends consume it: rows to show, plus an optional message.
///
/// On failure `rows` is empty and `error` holds the user-facing text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub rows: Vec<CountryRecord>,
    pub error: Option<String>,
}

impl LoadOutcome {
    pub fn from_result(result: Result<Vec<CountryRecord>, FetchError>) -> Self {
        match result {
            Ok(rows) => Self { rows, error: None },
            Err(err) => {
                warn!("fetch failed: {err}");
                Self {
                    rows: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
