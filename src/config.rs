use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::Context;

// =============================================================================
// Defaults
// =============================================================================

/// Public Percona version service
pub const DEFAULT_ENDPOINT: &str = "https://check.percona.com";

/// Timeout for a single version service request in milliseconds (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Base URL of the version service
    pub endpoint: String,
    /// Operator version used to select the compatibility table
    pub operator_version: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            operator_version: env!("CARGO_PKG_VERSION").to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ResolverConfig {
    /// Loads configuration from a JSON file, using defaults for missing fields
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Loads the explicit config file if given, otherwise the default one if it exists
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Returns the path to the config directory for pxc-version-resolver.
/// Uses $XDG_CONFIG_HOME/pxc-version-resolver if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/pxc-version-resolver,
/// or ./pxc-version-resolver if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("pxc-version-resolver")
}
