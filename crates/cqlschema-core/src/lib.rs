//! Core contracts and validators for cqlschema.
//!
//! This crate defines the configuration values for the keyspace, setup and
//! update workflows, the rules that decide whether they are safe to execute,
//! and the validated plans handed to an executor.

pub mod config;
pub mod error;
pub mod plan;
pub mod redaction;
pub mod validation;
pub mod version;

pub use config::{
    ConnectionTarget, CreateKeyspaceConfig, DEFAULT_PORT, DEFAULT_PROTOCOL_VERSION,
    DEFAULT_REPLICATION_FACTOR, DEFAULT_TIMEOUT_SECS, SetupSchemaConfig, TlsOptions,
    UpdateSchemaConfig,
};
pub use error::{ConfigError, Result};
pub use plan::{ExecutorError, KeyspacePlan, SchemaExecutor, SetupPlan, UpdatePlan, Versioning};
pub use redaction::{RedactedTarget, redact_target};
pub use validation::{
    validate_create_keyspace_config, validate_setup_config, validate_update_config,
};
pub use version::normalize_version;
