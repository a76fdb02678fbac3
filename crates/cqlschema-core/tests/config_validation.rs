use cqlschema_core::{
    ConfigError, ConnectionTarget, CreateKeyspaceConfig, SetupSchemaConfig, UpdateSchemaConfig,
    Versioning, normalize_version, validate_create_keyspace_config, validate_setup_config,
    validate_update_config,
};

fn target() -> ConnectionTarget {
    ConnectionTarget::new("127.0.0.1", "test-keyspace")
}

fn setup(
    initial_version: &str,
    disable_versioning: bool,
    schema_file_path: &str,
) -> SetupSchemaConfig {
    SetupSchemaConfig {
        target: target(),
        schema_file_path: schema_file_path.to_string(),
        initial_version: initial_version.to_string(),
        disable_versioning,
        overwrite: false,
    }
}

fn update(schema_dir: &str, target_version: &str) -> UpdateSchemaConfig {
    UpdateSchemaConfig {
        target: target(),
        schema_dir: schema_dir.to_string(),
        target_version: target_version.to_string(),
        dry_run: false,
    }
}

fn setup_variants() -> Vec<SetupSchemaConfig> {
    let mut variants = Vec::new();
    for initial_version in ["", "0.1", "abc"] {
        for disable_versioning in [false, true] {
            for schema_file_path in ["", "/tmp/foo.cql"] {
                variants.push(setup(initial_version, disable_versioning, schema_file_path));
            }
        }
    }
    variants
}

fn update_variants() -> Vec<UpdateSchemaConfig> {
    let mut variants = Vec::new();
    for schema_dir in ["", "/tmp"] {
        for target_version in ["", "abc", "v1.2"] {
            variants.push(update(schema_dir, target_version));
        }
    }
    variants
}

fn keyspace_variants() -> Vec<CreateKeyspaceConfig> {
    let mut variants = Vec::new();
    for replication_factor in [0, 1, 3] {
        for datacenter in ["", "dc1"] {
            variants.push(CreateKeyspaceConfig {
                target: target(),
                replication_factor,
                datacenter: datacenter.to_string(),
            });
        }
    }
    variants
}

#[test]
fn every_validator_requires_hosts() {
    for mut config in setup_variants() {
        config.target.hosts.clear();
        assert_eq!(
            validate_setup_config(&config).unwrap_err(),
            ConfigError::MissingHosts,
            "{config:?}"
        );
    }

    for mut config in update_variants() {
        config.target.hosts.clear();
        assert_eq!(
            validate_update_config(&config).unwrap_err(),
            ConfigError::MissingHosts,
            "{config:?}"
        );
    }

    for mut config in keyspace_variants() {
        config.target.hosts.clear();
        config.target.keyspace.clear();
        assert_eq!(
            validate_create_keyspace_config(&config).unwrap_err(),
            ConfigError::MissingHosts,
            "{config:?}"
        );
    }
}

#[test]
fn every_validator_requires_keyspace() {
    for mut config in setup_variants() {
        config.target.keyspace.clear();
        assert_eq!(
            validate_setup_config(&config).unwrap_err(),
            ConfigError::MissingKeyspace,
            "{config:?}"
        );
    }

    for mut config in update_variants() {
        config.target.keyspace.clear();
        assert_eq!(
            validate_update_config(&config).unwrap_err(),
            ConfigError::MissingKeyspace,
            "{config:?}"
        );
    }

    for mut config in keyspace_variants() {
        config.target.keyspace.clear();
        assert_eq!(
            validate_create_keyspace_config(&config).unwrap_err(),
            ConfigError::MissingKeyspace,
            "{config:?}"
        );
    }
}

#[test]
fn setup_rejects_empty_config_step_by_step() {
    let mut config = SetupSchemaConfig::default();
    assert!(validate_setup_config(&config).is_err());

    config.target.hosts = "127.0.0.1".to_string();
    assert!(validate_setup_config(&config).is_err());

    config.target.keyspace = "test-keyspace".to_string();
    assert_eq!(
        validate_setup_config(&config).unwrap_err(),
        ConfigError::MissingVersioning
    );
}

#[test]
fn setup_accepts_exactly_the_documented_combinations() {
    let cases = [
        ("", false, "", Err(ConfigError::MissingVersioning)),
        ("", false, "/tmp/foo.cql", Err(ConfigError::MissingVersioning)),
        ("0.1", true, "", Err(ConfigError::ConflictingVersioning)),
        ("0.1", true, "/tmp/foo.cql", Err(ConfigError::ConflictingVersioning)),
        ("", true, "", Err(ConfigError::MissingSchemaFile)),
        ("0.1", false, "/tmp/foo.cql", Ok(())),
        ("0.1", false, "", Ok(())),
        ("", true, "/tmp/foo.cql", Ok(())),
    ];

    for (initial_version, disable_versioning, schema_file, expected) in cases {
        let config = setup(initial_version, disable_versioning, schema_file);
        let result = validate_setup_config(&config).map(|_| ());
        assert_eq!(
            result, expected,
            "initial_version={initial_version:?} disable_versioning={disable_versioning} \
             schema_file={schema_file:?}"
        );
    }
}

#[test]
fn setup_plan_reflects_mode() {
    let versioned = validate_setup_config(&setup("v0.1", false, "/tmp/foo.cql")).unwrap();
    assert_eq!(
        versioned.versioning,
        Versioning::Enabled {
            initial_version: "0.1".to_string()
        }
    );
    assert_eq!(versioned.schema_file.as_deref(), Some("/tmp/foo.cql"));

    let unversioned = validate_setup_config(&setup("", true, "/tmp/foo.cql")).unwrap();
    assert_eq!(unversioned.versioning, Versioning::Disabled);

    let no_file = validate_setup_config(&setup("0.1", false, "")).unwrap();
    assert!(no_file.schema_file.is_none());
}

#[test]
fn setup_rejects_malformed_initial_version() {
    let err = validate_setup_config(&setup("abc", false, "")).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidVersion {
            version: "abc".to_string()
        }
    );
}

#[test]
fn setup_leaves_input_untouched() {
    let config = setup("v0.1", false, "/tmp/foo.cql");
    let before = config.clone();
    validate_setup_config(&config).unwrap();
    assert_eq!(config, before);
}

#[test]
fn update_rejects_missing_pieces() {
    let mut config = UpdateSchemaConfig::default();
    assert!(validate_update_config(&config).is_err());

    config.target.hosts = "127.0.0.1".to_string();
    assert!(validate_update_config(&config).is_err());

    config.target.keyspace = "test-keyspace".to_string();
    assert_eq!(
        validate_update_config(&config).unwrap_err(),
        ConfigError::MissingSchemaDir
    );
}

#[test]
fn update_rejects_invalid_target_version() {
    let err = validate_update_config(&update("/tmp", "abc")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidVersion { .. }));
}

#[test]
fn update_normalizes_target_version() {
    let latest = validate_update_config(&update("/tmp", "")).unwrap();
    assert_eq!(latest.target_version, None);

    let plain = validate_update_config(&update("/tmp", "1.2")).unwrap();
    assert_eq!(plain.target_version.as_deref(), Some("1.2"));

    let config = update("/tmp", "v1.2");
    let prefixed = validate_update_config(&config).unwrap();
    assert_eq!(prefixed.target_version.as_deref(), Some("1.2"));
    assert_eq!(config.target_version, "v1.2");
    assert_eq!(normalize_version("1.2").unwrap(), "1.2");
}

#[test]
fn keyspace_needs_only_hosts_and_keyspace() {
    let mut config = CreateKeyspaceConfig::default();
    assert!(validate_create_keyspace_config(&config).is_err());

    config.target.hosts = "h".to_string();
    assert!(validate_create_keyspace_config(&config).is_err());

    config.target.keyspace = "foobar".to_string();
    let plan = validate_create_keyspace_config(&config).unwrap();
    assert_eq!(plan.replication_factor, 1);
    assert!(plan.datacenter.is_none());
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(ConfigError::MissingHosts.to_string(), "no hosts provided");
    assert_eq!(ConfigError::MissingKeyspace.to_string(), "no keyspace provided");
    assert!(
        ConfigError::MissingVersioning
            .to_string()
            .contains("disable-versioning")
    );
}

#[test]
fn hosts_only_need_to_be_non_empty_text() {
    let config = update("/tmp", "");
    let mut blank_hosts = config.clone();
    blank_hosts.target.hosts = ", ".to_string();

    let plan = validate_update_config(&blank_hosts).unwrap();
    assert!(plan.target.host_list().is_empty());
}
