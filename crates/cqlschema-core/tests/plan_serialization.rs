use cqlschema_core::{ConnectionTarget, SetupSchemaConfig, validate_setup_config};

#[test]
fn serializes_plan_deterministically_without_password() {
    let mut target = ConnectionTarget::new("127.0.0.1", "app");
    target.password = "secret".to_string();
    let config = SetupSchemaConfig {
        target,
        schema_file_path: String::new(),
        initial_version: "v0.1".to_string(),
        disable_versioning: false,
        overwrite: false,
    };

    let plan = validate_setup_config(&config).expect("valid setup config");
    let json = serde_json::to_string_pretty(&plan).expect("serialize plan");
    let expected = r#"{
  "target": {
    "hosts": "127.0.0.1",
    "keyspace": "app",
    "port": 9042,
    "protocol_version": 4,
    "timeout_secs": 2,
    "tls": {
      "enabled": false,
      "enable_host_verification": false
    }
  },
  "versioning": {
    "mode": "enabled",
    "initial_version": "0.1"
  },
  "overwrite": false
}"#;
    assert_eq!(json, expected);
}
