use thiserror::Error;

use crate::version::component::Component;

#[derive(Debug, Error)]
pub enum VersionServiceError {
    #[error("Invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Received bad status code {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Failed to unmarshal response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Empty versions response")]
    EmptyVersions,

    #[error("Response has {count} {component} versions, expected exactly one")]
    AmbiguousComponent { component: Component, count: usize },
}

impl VersionServiceError {
    /// Returns true when the request did not complete within the client timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, VersionServiceError::Network(e) if e.is_timeout())
    }
}
