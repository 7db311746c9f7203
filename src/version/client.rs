//! HTTP client for the Percona version service

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::config::{DEFAULT_TIMEOUT_MS, ResolverConfig};
use crate::version::error::VersionServiceError;
use crate::version::matrix::resolve_matrix;
use crate::version::request::build_request_url;
use crate::version::service::VersionService;
use crate::version::types::{DepVersion, VersionMeta, VersionResponse};

/// Version service implementation backed by the remote HTTP API
#[derive(Debug, Clone)]
pub struct VersionServiceClient {
    operator_version: String,
    timeout: Duration,
}

impl VersionServiceClient {
    /// Creates a client for the given operator version with the default timeout
    pub fn new(operator_version: &str) -> Self {
        Self {
            operator_version: operator_version.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(&config.operator_version).with_timeout(Duration::from_millis(config.timeout_ms))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn operator_version(&self) -> &str {
        &self.operator_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait::async_trait]
impl VersionService for VersionServiceClient {
    async fn get_exact_version(
        &self,
        endpoint: &str,
        meta: &VersionMeta,
    ) -> Result<DepVersion, VersionServiceError> {
        let url = build_request_url(endpoint, &self.operator_version, meta)?;
        debug!("Requesting version matrix: {}", url);

        // Each call owns its connection and releases it on return.
        let client = reqwest::Client::builder()
            .user_agent(concat!("pxc-version-resolver/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()?;

        let response = client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();

        if status != StatusCode::OK {
            warn!("Version service returned status {}: {}", status, url);
            return Err(VersionServiceError::BadStatus(status));
        }

        let body = response.text().await?;
        let parsed: VersionResponse = serde_json::from_str(&body).inspect_err(|e| {
            warn!("Failed to parse version service response: {}", e);
        })?;

        resolve_matrix(&parsed)
    }
}
