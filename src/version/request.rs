//! Request URL construction for the version service

use reqwest::Url;
use tracing::warn;

use crate::version::error::VersionServiceError;
use crate::version::types::VersionMeta;

/// Path prefix of the operator version API
const API_PATH: [&str; 2] = ["v1", "pxc-operator"];

/// Builds `{endpoint}/v1/pxc-operator/{operator_version}/{apply}` with the lookup
/// query attached.
///
/// Mandatory parameters are always sent, even when empty. Optional versions are
/// only sent when present and non-empty.
pub fn build_request_url(
    endpoint: &str,
    operator_version: &str,
    meta: &VersionMeta,
) -> Result<Url, VersionServiceError> {
    let invalid = |reason: String| VersionServiceError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let mut url = Url::parse(endpoint.trim_end_matches('/'))
        .map_err(|e| invalid(e.to_string()))?;

    // Dot segments would be collapsed by URL normalization and drop the segment.
    for segment in [operator_version, meta.apply.as_str()] {
        if segment == "." || segment == ".." {
            return Err(invalid(format!("path segment {segment:?} is not allowed")));
        }
    }

    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(API_PATH)
        .push(operator_version)
        .push(&meta.apply);

    let mandatory = [
        ("databaseVersion", meta.pxc_version.as_str()),
        ("kubeVersion", meta.kube_version.as_str()),
        ("platform", meta.platform.as_str()),
        ("customResourceUID", meta.cr_uid.as_str()),
    ];
    let optional = [
        ("pmmVersion", meta.pmm_version.as_deref()),
        ("backupVersion", meta.backup_version.as_deref()),
        ("proxysqlVersion", meta.proxysql_version.as_deref()),
        ("haproxyVersion", meta.haproxy_version.as_deref()),
    ];

    {
        let mut query = url.query_pairs_mut();
        for (key, value) in mandatory {
            if value.is_empty() {
                warn!("Sending empty {} to version service", key);
            }
            query.append_pair(key, value);
        }
        for (key, value) in optional {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                query.append_pair(key, value);
            }
        }
    }

    Ok(url)
}
