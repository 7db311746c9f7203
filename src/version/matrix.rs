//! Reduction of the version matrix to one version per component

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::version::component::Component;
use crate::version::error::VersionServiceError;
use crate::version::types::{DepVersion, ResolvedComponent, Version, VersionResponse};

/// Returns the only candidate version of a component.
///
/// The service narrows every component to a single candidate for the query it
/// was given. No candidate means nothing compatible exists, several mean the
/// query was ambiguous. Both are errors; a candidate is never picked.
pub fn select_single(
    component: Component,
    versions: &IndexMap<String, Version>,
) -> Result<(&str, &Version), VersionServiceError> {
    match versions.first() {
        Some((key, version)) if versions.len() == 1 => Ok((key.as_str(), version)),
        _ => {
            warn!(
                "Version service returned {} candidates for {}: {:?}",
                versions.len(),
                component,
                versions.keys().collect::<Vec<_>>()
            );
            Err(VersionServiceError::AmbiguousComponent {
                component,
                count: versions.len(),
            })
        }
    }
}

/// Resolves every component from the first matrix of the response
pub fn resolve_matrix(response: &VersionResponse) -> Result<DepVersion, VersionServiceError> {
    let Some(first) = response.versions.first() else {
        return Err(VersionServiceError::EmptyVersions);
    };

    if response.versions.len() > 1 {
        debug!(
            "Ignoring {} additional matrix entries after operator {} / {}",
            response.versions.len() - 1,
            first.operator,
            first.database
        );
    }

    let mut dep = DepVersion::default();
    for component in Component::ALL {
        let (version, entry) = select_single(component, first.matrix.get(component))?;
        debug!("Selected {} {} ({})", component, version, entry.image_path);
        dep.set(
            component,
            ResolvedComponent {
                version: version.to_string(),
                image: entry.image_path.clone(),
            },
        );
    }

    Ok(dep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::types::{OperatorVersion, VersionMatrix};
    use rstest::rstest;

    fn entry(image: &str) -> Version {
        Version {
            image_path: image.to_string(),
            status: "recommended".to_string(),
            ..Default::default()
        }
    }

    fn single(version: &str, image: &str) -> IndexMap<String, Version> {
        IndexMap::from([(version.to_string(), entry(image))])
    }

    fn full_matrix() -> VersionMatrix {
        VersionMatrix {
            pxc: single("8.0.33-25.1", "percona/pxc:8.0.33"),
            pmm: single("2.41.0", "percona/pmm-client:2.41.0"),
            proxysql: single("2.5.5", "percona/proxysql2:2.5.5"),
            haproxy: single("2.8.5", "percona/haproxy:2.8.5"),
            backup: single("8.0.32-26", "percona/xtrabackup:8.0.32"),
        }
    }

    fn response(matrices: Vec<VersionMatrix>) -> VersionResponse {
        VersionResponse {
            versions: matrices
                .into_iter()
                .map(|matrix| OperatorVersion {
                    operator: "1.14.0".to_string(),
                    database: "pxc-operator".to_string(),
                    matrix,
                })
                .collect(),
        }
    }

    fn matrix_slot(
        matrix: &mut VersionMatrix,
        component: Component,
    ) -> &mut IndexMap<String, Version> {
        match component {
            Component::Pxc => &mut matrix.pxc,
            Component::Pmm => &mut matrix.pmm,
            Component::ProxySql => &mut matrix.proxysql,
            Component::HaProxy => &mut matrix.haproxy,
            Component::Backup => &mut matrix.backup,
        }
    }

    #[test]
    fn select_single_returns_only_key_and_entry() {
        let versions = single("8.0.33-25.1", "percona/pxc:8.0.33");

        let (version, entry) = select_single(Component::Pxc, &versions).unwrap();

        assert_eq!(version, "8.0.33-25.1");
        assert_eq!(entry.image_path, "percona/pxc:8.0.33");
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(3)]
    fn select_single_rejects_anything_but_one_candidate(#[case] count: usize) {
        let versions: IndexMap<String, Version> = (0..count)
            .map(|i| (format!("2.5.{i}"), entry("percona/proxysql2")))
            .collect();

        let result = select_single(Component::ProxySql, &versions);

        assert!(matches!(
            result,
            Err(VersionServiceError::AmbiguousComponent {
                component: Component::ProxySql,
                count: c,
            }) if c == count
        ));
    }

    #[test]
    fn resolve_matrix_returns_every_single_candidate() {
        let dep = resolve_matrix(&response(vec![full_matrix()])).unwrap();

        assert_eq!(
            dep,
            DepVersion {
                pxc: ResolvedComponent {
                    version: "8.0.33-25.1".to_string(),
                    image: "percona/pxc:8.0.33".to_string(),
                },
                backup: ResolvedComponent {
                    version: "8.0.32-26".to_string(),
                    image: "percona/xtrabackup:8.0.32".to_string(),
                },
                pmm: ResolvedComponent {
                    version: "2.41.0".to_string(),
                    image: "percona/pmm-client:2.41.0".to_string(),
                },
                proxysql: ResolvedComponent {
                    version: "2.5.5".to_string(),
                    image: "percona/proxysql2:2.5.5".to_string(),
                },
                haproxy: ResolvedComponent {
                    version: "2.8.5".to_string(),
                    image: "percona/haproxy:2.8.5".to_string(),
                },
            }
        );
    }

    #[test]
    fn resolve_matrix_fails_on_empty_versions() {
        let result = resolve_matrix(&response(vec![]));

        assert!(matches!(result, Err(VersionServiceError::EmptyVersions)));
    }

    #[test]
    fn resolve_matrix_treats_null_versions_as_empty() {
        let response: VersionResponse = serde_json::from_str(r#"{"versions": null}"#).unwrap();

        let result = resolve_matrix(&response);

        assert!(matches!(result, Err(VersionServiceError::EmptyVersions)));
    }

    #[test]
    fn resolve_matrix_treats_null_component_map_as_missing() {
        let response: VersionResponse = serde_json::from_str(
            r#"{"versions": [{"matrix": {
                "pxc": null,
                "pmm": {"2.41.0": {"imagePath": "percona/pmm-client:2.41.0"}}
            }}]}"#,
        )
        .unwrap();

        let result = resolve_matrix(&response);

        assert!(matches!(
            result,
            Err(VersionServiceError::AmbiguousComponent {
                component: Component::Pxc,
                count: 0
            })
        ));
    }

    #[test]
    fn resolve_matrix_accepts_null_entry_fields() {
        let entry = r#"{"imagePath": "img", "imageHash": null, "status": null, "critilal": null}"#;
        let body = format!(
            r#"{{"versions": [{{"matrix": {{
                "pxc": {{"8.0.33-25.1": {entry}}},
                "pmm": {{"2.41.0": {entry}}},
                "proxysql": {{"2.5.5": {entry}}},
                "haproxy": {{"2.8.5": {entry}}},
                "backup": {{"8.0.32-26": {entry}}}
            }}}}]}}"#
        );
        let response: VersionResponse = serde_json::from_str(&body).unwrap();

        let dep = resolve_matrix(&response).unwrap();

        assert_eq!(dep.pxc.version, "8.0.33-25.1");
        assert_eq!(dep.backup.image, "img");
    }

    #[test]
    fn resolve_matrix_uses_only_first_entry() {
        let mut second = full_matrix();
        second.pxc = single("5.7.44-31.65", "percona/pxc:5.7.44");
        second.haproxy = IndexMap::new();

        let dep = resolve_matrix(&response(vec![full_matrix(), second])).unwrap();

        assert_eq!(dep.pxc.version, "8.0.33-25.1");
    }

    #[rstest]
    #[case(Component::Pxc)]
    #[case(Component::Pmm)]
    #[case(Component::ProxySql)]
    #[case(Component::HaProxy)]
    #[case(Component::Backup)]
    fn resolve_matrix_fails_when_one_component_is_ambiguous(#[case] component: Component) {
        let mut matrix = full_matrix();
        matrix_slot(&mut matrix, component).insert("0.0.1".to_string(), entry("other"));

        let result = resolve_matrix(&response(vec![matrix]));

        assert!(matches!(
            result,
            Err(VersionServiceError::AmbiguousComponent {
                component: c,
                count: 2
            }) if c == component
        ));
    }

    #[rstest]
    #[case(Component::Pxc)]
    #[case(Component::Pmm)]
    #[case(Component::ProxySql)]
    #[case(Component::HaProxy)]
    #[case(Component::Backup)]
    fn resolve_matrix_fails_when_one_component_is_missing(#[case] component: Component) {
        let mut matrix = full_matrix();
        matrix_slot(&mut matrix, component).clear();

        let result = resolve_matrix(&response(vec![matrix]));

        assert!(matches!(
            result,
            Err(VersionServiceError::AmbiguousComponent {
                component: c,
                count: 0
            }) if c == component
        ));
    }

    #[test]
    fn resolve_matrix_reports_first_failing_component_in_resolution_order() {
        let mut matrix = full_matrix();
        matrix.haproxy.clear();
        matrix.backup.clear();

        let result = resolve_matrix(&response(vec![matrix]));

        assert!(matches!(
            result,
            Err(VersionServiceError::AmbiguousComponent {
                component: Component::Backup,
                count: 0
            })
        ));
    }
}
