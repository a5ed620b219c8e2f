use thiserror::Error;

/// Failures of the remote lookup flow.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status or an unreadable body.
    #[error("service error: {0}")]
    Service(String),

    #[error("no creature named '{0}'")]
    NotFound(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Service(format!("malformed response: {}", err))
        } else if let Some(status) = err.status() {
            LookupError::Service(format!("request failed with status {}", status))
        } else {
            LookupError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Service(format!("malformed response: {}", err))
    }
}
