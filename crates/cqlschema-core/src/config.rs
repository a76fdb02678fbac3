use std::fmt;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default CQL native transport port.
pub const DEFAULT_PORT: u16 = 9042;
/// Default CQL native protocol version.
pub const DEFAULT_PROTOCOL_VERSION: u8 = 4;
/// Default connect timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;
/// Default replication factor for new keyspaces.
pub const DEFAULT_REPLICATION_FACTOR: u32 = 1;

/// Cluster connection parameters shared by every workflow.
///
/// Only `hosts` and `keyspace` are inspected by the validators; the other
/// fields are handed through to whatever executes the validated plan.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConnectionTarget {
    /// Comma separated list of cluster hosts.
    pub hosts: String,
    /// Keyspace the workflow operates on.
    pub keyspace: String,
    pub port: u16,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,
    /// Never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
    pub protocol_version: u8,
    /// Connect timeout in seconds.
    pub timeout_secs: u64,
    pub tls: TlsOptions,
}

impl ConnectionTarget {
    /// Build a target for the given hosts and keyspace with default settings.
    pub fn new(hosts: impl Into<String>, keyspace: impl Into<String>) -> Self {
        Self {
            hosts: hosts.into(),
            keyspace: keyspace.into(),
            ..Self::default()
        }
    }

    /// Individual hosts, with surrounding whitespace and empty entries removed.
    pub fn host_list(&self) -> Vec<&str> {
        self.hosts
            .split(',')
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .collect()
    }
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self {
            hosts: String::new(),
            keyspace: String::new(),
            port: DEFAULT_PORT,
            user: String::new(),
            password: String::new(),
            protocol_version: DEFAULT_PROTOCOL_VERSION,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            tls: TlsOptions::default(),
        }
    }
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        f.debug_struct("ConnectionTarget")
            .field("hosts", &self.hosts)
            .field("keyspace", &self.keyspace)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &password)
            .field("protocol_version", &self.protocol_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("tls", &self.tls)
            .finish()
    }
}

/// TLS settings for the cluster connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TlsOptions {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<PathBuf>,
    pub enable_host_verification: bool,
}

/// Configuration for creating a fresh schema in a keyspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SetupSchemaConfig {
    pub target: ConnectionTarget,
    /// CQL file applied during setup. Empty means unset.
    pub schema_file_path: String,
    /// Version recorded once setup completes. Empty means unset.
    pub initial_version: String,
    /// Skip version tracking entirely.
    pub disable_versioning: bool,
    /// Drop existing tables before applying the schema.
    pub overwrite: bool,
}

/// Configuration for applying incremental schema changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UpdateSchemaConfig {
    pub target: ConnectionTarget,
    /// Directory holding one sub-directory per schema version.
    pub schema_dir: String,
    /// Version to migrate up to. Empty means the latest available.
    pub target_version: String,
    /// Report the changes without applying them.
    pub dry_run: bool,
}

/// Configuration for creating a new keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CreateKeyspaceConfig {
    pub target: ConnectionTarget,
    pub replication_factor: u32,
    /// Datacenter for network topology replication. Empty means simple strategy.
    pub datacenter: String,
}

impl Default for CreateKeyspaceConfig {
    fn default() -> Self {
        Self {
            target: ConnectionTarget::default(),
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            datacenter: String::new(),
        }
    }
}
