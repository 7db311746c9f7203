//! Components tracked by the version matrix

use std::fmt;

/// A dependent piece of software whose image version is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Percona XtraDB Cluster database engine
    Pxc,
    /// Percona Monitoring and Management client
    Pmm,
    /// ProxySQL connection pooler
    ProxySql,
    /// HAProxy load balancer
    HaProxy,
    /// XtraBackup backup tool
    Backup,
}

impl Component {
    /// Components in the order they are resolved
    pub const ALL: [Component; 5] = [
        Component::Pxc,
        Component::Backup,
        Component::Pmm,
        Component::ProxySql,
        Component::HaProxy,
    ];

    /// Returns the key used for this component in the version matrix
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Pxc => "pxc",
            Component::Pmm => "pmm",
            Component::ProxySql => "proxysql",
            Component::HaProxy => "haproxy",
            Component::Backup => "backup",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Component {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pxc" => Ok(Component::Pxc),
            "pmm" => Ok(Component::Pmm),
            "proxysql" => Ok(Component::ProxySql),
            "haproxy" => Ok(Component::HaProxy),
            "backup" => Ok(Component::Backup),
            _ => Err(()),
        }
    }
}
