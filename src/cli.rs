//! Command line surface of the resolver

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::config::ResolverConfig;
use crate::version::service::VersionService;
use crate::version::types::VersionMeta;

/// Arguments of the `resolve` subcommand
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Upgrade strategy: "recommended", "latest" or an exact version
    #[arg(long, default_value = "recommended")]
    pub apply: String,
    /// Currently deployed database version
    #[arg(long)]
    pub pxc_version: String,
    #[arg(long)]
    pub kube_version: String,
    #[arg(long)]
    pub platform: String,
    /// UID of the PerconaXtraDBCluster resource
    #[arg(long)]
    pub cr_uid: String,
    #[arg(long)]
    pub pmm_version: Option<String>,
    #[arg(long)]
    pub backup_version: Option<String>,
    #[arg(long)]
    pub proxysql_version: Option<String>,
    #[arg(long)]
    pub haproxy_version: Option<String>,
    /// Version service URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Operator version (overrides config)
    #[arg(long)]
    pub operator_version: Option<String>,
    /// Request timeout in milliseconds (overrides config)
    #[arg(long)]
    pub timeout_ms: Option<u64>,
    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ResolveArgs {
    /// Applies command line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: ResolverConfig) -> ResolverConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(operator_version) = &self.operator_version {
            config.operator_version = operator_version.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        config
    }

    pub fn version_meta(&self) -> VersionMeta {
        VersionMeta::new(
            &self.apply,
            &self.pxc_version,
            &self.kube_version,
            &self.platform,
            &self.cr_uid,
        )
        .with_pmm_version(self.pmm_version.clone().unwrap_or_default())
        .with_backup_version(self.backup_version.clone().unwrap_or_default())
        .with_proxysql_version(self.proxysql_version.clone().unwrap_or_default())
        .with_haproxy_version(self.haproxy_version.clone().unwrap_or_default())
    }
}

/// Resolves versions through `service` and writes them as pretty JSON to `out`
pub async fn run_resolve<S: VersionService + ?Sized, W: Write>(
    service: &S,
    endpoint: &str,
    meta: &VersionMeta,
    out: &mut W,
) -> anyhow::Result<()> {
    let versions = service
        .get_exact_version(endpoint, meta)
        .await
        .with_context(|| format!("Failed to resolve versions from {}", endpoint))?;

    info!(
        "Resolved pxc {} for {} ({})",
        versions.pxc.version, meta.cr_uid, meta.apply
    );

    serde_json::to_writer_pretty(&mut *out, &versions)?;
    writeln!(out)?;
    Ok(())
}
