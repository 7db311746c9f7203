//! Query, wire and result types for the version service

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::version::component::Component;

/// Metadata describing the cluster a version lookup is made for
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMeta {
    /// Selection strategy passed through to the service ("recommended", "latest", "8.0.32", ...)
    pub apply: String,
    /// Currently deployed database version
    pub pxc_version: String,
    pub kube_version: String,
    pub platform: String,
    /// UID of the custom resource, used by the service to pin versions per cluster
    pub cr_uid: String,
    pub pmm_version: Option<String>,
    pub backup_version: Option<String>,
    pub proxysql_version: Option<String>,
    pub haproxy_version: Option<String>,
}

impl VersionMeta {
    pub fn new(
        apply: impl Into<String>,
        pxc_version: impl Into<String>,
        kube_version: impl Into<String>,
        platform: impl Into<String>,
        cr_uid: impl Into<String>,
    ) -> Self {
        Self {
            apply: apply.into(),
            pxc_version: pxc_version.into(),
            kube_version: kube_version.into(),
            platform: platform.into(),
            cr_uid: cr_uid.into(),
            ..Default::default()
        }
    }

    pub fn with_pmm_version(mut self, version: impl Into<String>) -> Self {
        self.pmm_version = non_empty(version.into());
        self
    }

    pub fn with_backup_version(mut self, version: impl Into<String>) -> Self {
        self.backup_version = non_empty(version.into());
        self
    }

    pub fn with_proxysql_version(mut self, version: impl Into<String>) -> Self {
        self.proxysql_version = non_empty(version.into());
        self
    }

    pub fn with_haproxy_version(mut self, version: impl Into<String>) -> Self {
        self.haproxy_version = non_empty(version.into());
        self
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Decodes an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body of the version service
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub versions: Vec<OperatorVersion>,
}

/// Matrix bound to one operator/database version pair
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OperatorVersion {
    #[serde(deserialize_with = "null_as_default")]
    pub operator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database: String,
    #[serde(deserialize_with = "null_as_default")]
    pub matrix: VersionMatrix,
}

/// Candidate versions per component, keyed by version string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VersionMatrix {
    #[serde(deserialize_with = "null_as_default")]
    pub pxc: IndexMap<String, Version>,
    #[serde(deserialize_with = "null_as_default")]
    pub pmm: IndexMap<String, Version>,
    #[serde(deserialize_with = "null_as_default")]
    pub proxysql: IndexMap<String, Version>,
    #[serde(deserialize_with = "null_as_default")]
    pub haproxy: IndexMap<String, Version>,
    #[serde(deserialize_with = "null_as_default")]
    pub backup: IndexMap<String, Version>,
}

impl VersionMatrix {
    pub fn get(&self, component: Component) -> &IndexMap<String, Version> {
        match component {
            Component::Pxc => &self.pxc,
            Component::Pmm => &self.pmm,
            Component::ProxySql => &self.proxysql,
            Component::HaProxy => &self.haproxy,
            Component::Backup => &self.backup,
        }
    }
}

/// Image record for a single component version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Version {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    // The service spells this key "critilal".
    #[serde(
        rename = "critilal",
        alias = "critical",
        deserialize_with = "null_as_default"
    )]
    pub critical: bool,
}

/// Version and image chosen for one component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedComponent {
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
}

/// Resolved version set for every tracked component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepVersion {
    pub pxc: ResolvedComponent,
    pub backup: ResolvedComponent,
    pub pmm: ResolvedComponent,
    pub proxysql: ResolvedComponent,
    pub haproxy: ResolvedComponent,
}

impl DepVersion {
    pub fn get(&self, component: Component) -> &ResolvedComponent {
        match component {
            Component::Pxc => &self.pxc,
            Component::Pmm => &self.pmm,
            Component::ProxySql => &self.proxysql,
            Component::HaProxy => &self.haproxy,
            Component::Backup => &self.backup,
        }
    }

    fn get_mut(&mut self, component: Component) -> &mut ResolvedComponent {
        match component {
            Component::Pxc => &mut self.pxc,
            Component::Pmm => &mut self.pmm,
            Component::ProxySql => &mut self.proxysql,
            Component::HaProxy => &mut self.haproxy,
            Component::Backup => &mut self.backup,
        }
    }

    pub(crate) fn set(&mut self, component: Component, resolved: ResolvedComponent) {
        *self.get_mut(component) = resolved;
    }

    /// Iterates over components in resolution order
    pub fn iter(&self) -> impl Iterator<Item = (Component, &ResolvedComponent)> {
        Component::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}
