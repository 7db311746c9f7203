//! Version service trait for resolving component versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::VersionServiceError;
use crate::version::types::{DepVersion, VersionMeta};

/// Trait for resolving the exact component versions of a cluster
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionService: Send + Sync {
    /// Resolves one version and image per component
    ///
    /// # Arguments
    /// * `endpoint` - Base URL of the version service
    /// * `meta` - Metadata of the cluster being resolved
    ///
    /// # Returns
    /// * `Ok(DepVersion)` - Every component resolved to exactly one version
    /// * `Err(VersionServiceError)` - If any step fails; no partial result is returned
    async fn get_exact_version(
        &self,
        endpoint: &str,
        meta: &VersionMeta,
    ) -> Result<DepVersion, VersionServiceError>;
}
