use serde::Serialize;
use thiserror::Error;

use crate::config::ConnectionTarget;

/// Validated request to create a keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyspacePlan {
    pub target: ConnectionTarget,
    pub replication_factor: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
}

/// Version tracking mode for schema setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Versioning {
    /// Record `initial_version` once the schema is applied.
    Enabled { initial_version: String },
    /// Apply the schema file without version tracking.
    Disabled,
}

/// Validated request to set up a fresh schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupPlan {
    pub target: ConnectionTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_file: Option<String>,
    pub versioning: Versioning,
    pub overwrite: bool,
}

/// Validated request to migrate a schema forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePlan {
    pub target: ConnectionTarget,
    pub schema_dir: String,
    /// Canonical target version; `None` means the latest available.
    pub target_version: Option<String>,
    pub dry_run: bool,
}

/// Failures raised while carrying out a validated plan.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Implemented by anything that can carry out validated schema operations.
///
/// Only plans reach an executor, so every operation it sees has already
/// passed configuration validation.
pub trait SchemaExecutor {
    /// Identifier used in logs (e.g. `dry-run`).
    fn name(&self) -> &'static str;

    fn create_keyspace(&mut self, plan: &KeyspacePlan) -> Result<(), ExecutorError>;

    fn setup_schema(&mut self, plan: &SetupPlan) -> Result<(), ExecutorError>;

    fn update_schema(&mut self, plan: &UpdatePlan) -> Result<(), ExecutorError>;
}
