use std::path::Path;

use cqlschema_core::{
    ConnectionTarget, CreateKeyspaceConfig, DEFAULT_REPLICATION_FACTOR, SetupSchemaConfig,
    UpdateSchemaConfig,
};
use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

use super::SettingsResult;

/// Contents of the optional TOML config file.
///
/// Every section may be omitted; values left unset here can still come from
/// environment variables or flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub connection: ConnectionTarget,
    pub setup: SetupSection,
    pub update: UpdateSection,
    pub keyspace: KeyspaceSection,
}

/// `[setup]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SetupSection {
    pub schema_file_path: String,
    pub initial_version: String,
    pub disable_versioning: bool,
    pub overwrite: bool,
}

/// `[update]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateSection {
    pub schema_dir: String,
    pub target_version: String,
    pub dry_run: bool,
}

/// `[keyspace]` section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct KeyspaceSection {
    pub replication_factor: u32,
    pub datacenter: String,
}

impl Default for KeyspaceSection {
    fn default() -> Self {
        Self {
            replication_factor: DEFAULT_REPLICATION_FACTOR,
            datacenter: String::new(),
        }
    }
}

impl FileConfig {
    pub fn setup_config(&self) -> SetupSchemaConfig {
        SetupSchemaConfig {
            target: self.connection.clone(),
            schema_file_path: self.setup.schema_file_path.clone(),
            initial_version: self.setup.initial_version.clone(),
            disable_versioning: self.setup.disable_versioning,
            overwrite: self.setup.overwrite,
        }
    }

    pub fn update_config(&self) -> UpdateSchemaConfig {
        UpdateSchemaConfig {
            target: self.connection.clone(),
            schema_dir: self.update.schema_dir.clone(),
            target_version: self.update.target_version.clone(),
            dry_run: self.update.dry_run,
        }
    }

    pub fn keyspace_config(&self) -> CreateKeyspaceConfig {
        CreateKeyspaceConfig {
            target: self.connection.clone(),
            replication_factor: self.keyspace.replication_factor,
            datacenter: self.keyspace.datacenter.clone(),
        }
    }
}

/// Load the config file, or defaults when no path was given.
pub fn load_file_config(path: Option<&Path>) -> SettingsResult<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };

    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Emit the JSON Schema for the config file.
pub fn config_json_schema() -> RootSchema {
    schema_for!(FileConfig)
}
