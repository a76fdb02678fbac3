use crate::config::{ConnectionTarget, CreateKeyspaceConfig, SetupSchemaConfig, UpdateSchemaConfig};
use crate::error::{ConfigError, Result};
use crate::plan::{KeyspacePlan, SetupPlan, UpdatePlan, Versioning};
use crate::version::normalize_version;

/// Validate a configuration for the "create fresh schema" workflow.
///
/// Checks, stopping at the first failure:
/// - hosts and keyspace are set
/// - an initial version or disable-versioning is given, not both
/// - disable-versioning comes with a schema file
/// - the initial version is well formed
pub fn validate_setup_config(cfg: &SetupSchemaConfig) -> Result<SetupPlan> {
    validate_target(&cfg.target)?;

    let versioning = match (cfg.disable_versioning, cfg.initial_version.is_empty()) {
        (false, true) => return Err(ConfigError::MissingVersioning),
        (true, false) => return Err(ConfigError::ConflictingVersioning),
        (true, true) if cfg.schema_file_path.is_empty() => {
            return Err(ConfigError::MissingSchemaFile);
        }
        (true, true) => Versioning::Disabled,
        (false, false) => Versioning::Enabled {
            initial_version: normalize_version(&cfg.initial_version)?,
        },
    };

    Ok(SetupPlan {
        target: cfg.target.clone(),
        schema_file: non_empty(&cfg.schema_file_path),
        versioning,
        overwrite: cfg.overwrite,
    })
}

/// Validate a configuration for the "apply incremental changes" workflow.
///
/// An empty target version means "latest" and is passed through unset.
pub fn validate_update_config(cfg: &UpdateSchemaConfig) -> Result<UpdatePlan> {
    validate_target(&cfg.target)?;

    if cfg.schema_dir.is_empty() {
        return Err(ConfigError::MissingSchemaDir);
    }

    let target_version = if cfg.target_version.is_empty() {
        None
    } else {
        Some(normalize_version(&cfg.target_version)?)
    };

    Ok(UpdatePlan {
        target: cfg.target.clone(),
        schema_dir: cfg.schema_dir.clone(),
        target_version,
        dry_run: cfg.dry_run,
    })
}

/// Validate the minimal configuration needed to create a keyspace.
pub fn validate_create_keyspace_config(cfg: &CreateKeyspaceConfig) -> Result<KeyspacePlan> {
    validate_target(&cfg.target)?;

    Ok(KeyspacePlan {
        target: cfg.target.clone(),
        replication_factor: cfg.replication_factor,
        datacenter: non_empty(&cfg.datacenter),
    })
}

/// Hosts and keyspace only need to be non-empty strings; a value such as
/// `", "` passes even though [`ConnectionTarget::host_list`] is empty.
fn validate_target(target: &ConnectionTarget) -> Result<()> {
    if target.hosts.is_empty() {
        return Err(ConfigError::MissingHosts);
    }
    if target.keyspace.is_empty() {
        return Err(ConfigError::MissingKeyspace);
    }
    Ok(())
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
