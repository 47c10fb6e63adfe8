use thiserror::Error;

/// Faults raised below the HTTP status level.
///
/// A probe never propagates these; it prints the message and records a failure.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Map a reqwest error onto the taxonomy
    pub fn from_reqwest(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(timeout_secs)
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_decode() || err.is_body() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}
