use thiserror::Error;

/// Why a fetch produced no rows.
///
/// Front-ends handle every variant the same way: show the message, continue with an
/// empty table.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("failed to reach the countries API (HTTP status {0})")]
    Status(u16),
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the expected JSON array.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status code, when the failure came from the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
