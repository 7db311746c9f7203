#![allow(dead_code)]

use mockito::{Mock, Server};
use serde_json::{Value, json};

/// Builder for version service response bodies
#[derive(Default)]
pub struct MatrixBody {
    components: Vec<(&'static str, Vec<(String, String)>)>,
}

impl MatrixBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matrix with exactly one candidate per component
    pub fn single() -> Self {
        Self::new()
            .with("pxc", &[("8.0.33-25.1", "percona/pxc:8.0.33")])
            .with("pmm", &[("2.41.0", "percona/pmm-client:2.41.0")])
            .with("proxysql", &[("2.5.5", "percona/proxysql2:2.5.5")])
            .with("haproxy", &[("2.8.5", "percona/haproxy:2.8.5")])
            .with("backup", &[("8.0.32-26", "percona/xtrabackup:8.0.32")])
    }

    /// Replaces the candidates of a component
    pub fn with(mut self, component: &'static str, candidates: &[(&str, &str)]) -> Self {
        self.components.retain(|(name, _)| *name != component);
        self.components.push((
            component,
            candidates
                .iter()
                .map(|(v, i)| (v.to_string(), i.to_string()))
                .collect(),
        ));
        self
    }

    pub fn to_value(&self) -> Value {
        let mut matrix = serde_json::Map::new();
        for (component, candidates) in &self.components {
            let entries: serde_json::Map<String, Value> = candidates
                .iter()
                .map(|(version, image)| {
                    (
                        version.clone(),
                        json!({
                            "version": version,
                            "imagePath": image,
                            "imageHash": format!("sha256:{version}"),
                            "status": "recommended",
                            "critilal": false
                        }),
                    )
                })
                .collect();
            matrix.insert(component.to_string(), Value::Object(entries));
        }

        json!({
            "versions": [{
                "operator": "1.14.0",
                "database": "pxc-operator",
                "matrix": matrix
            }]
        })
    }

    pub fn to_body(&self) -> String {
        self.to_value().to_string()
    }
}

/// Mounts a version service answering any request on the given path
pub async fn mock_version_service(
    server: &mut Server,
    path: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(mockito::Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
