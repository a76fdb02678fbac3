mod executor;
mod logging;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use cqlschema_core::{
    ConfigError, ConnectionTarget, CreateKeyspaceConfig, ExecutorError, SchemaExecutor,
    SetupSchemaConfig, UpdateSchemaConfig, redact_target, validate_create_keyspace_config,
    validate_setup_config, validate_update_config,
};
use executor::DryRunExecutor;
use logging::{LogFormat, LogOptions, init_logging};
use settings::{FileConfig, SettingsError, config_json_schema, load_file_config};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("config file error: {0}")]
    Settings(#[from] SettingsError),
    #[error("executor error: {0}")]
    Executor(#[from] ExecutorError),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

impl CliError {
    /// Configuration failures exit with a usage status; everything else is operational.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 2,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cqlschema", version, about = "Keyspace and schema management for CQL clusters")]
struct Cli {
    /// Optional TOML config file; flags and environment variables override it.
    #[arg(long, global = true, env = "CQLSCHEMA_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Only log warnings and errors.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
    /// Log format on stderr.
    #[arg(long, global = true, value_enum, env = "CQLSCHEMA_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, global = true, env = "CQLSCHEMA_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a keyspace.
    CreateKeyspace(CreateKeyspaceArgs),
    /// Set up a fresh schema in a keyspace.
    SetupSchema(SetupSchemaArgs),
    /// Apply versioned schema changes up to a target version.
    UpdateSchema(UpdateSchemaArgs),
    /// Print the JSON Schema of the config file.
    ConfigSchema,
}

#[derive(Args, Debug, Default)]
struct ConnectionArgs {
    /// Comma separated cluster hosts.
    #[arg(short = 'e', long = "endpoint", global = true, env = "CASSANDRA_HOST")]
    hosts: Option<String>,
    #[arg(short, long, global = true, env = "CASSANDRA_PORT")]
    port: Option<u16>,
    #[arg(short, long, global = true, env = "CASSANDRA_USER")]
    user: Option<String>,
    #[arg(long, global = true, env = "CASSANDRA_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    #[arg(short, long, global = true, env = "CASSANDRA_KEYSPACE")]
    keyspace: Option<String>,
    #[arg(long, global = true, env = "CASSANDRA_PROTO_VERSION")]
    protocol_version: Option<u8>,
    /// Connect timeout in seconds.
    #[arg(long, global = true, env = "CASSANDRA_TIMEOUT")]
    timeout: Option<u64>,
    /// Enable TLS.
    #[arg(long, global = true, env = "CASSANDRA_TLS", default_value_t = false)]
    tls: bool,
    #[arg(long, global = true, env = "CASSANDRA_TLS_CERT", value_name = "PATH")]
    tls_cert_file: Option<PathBuf>,
    #[arg(long, global = true, env = "CASSANDRA_TLS_KEY", value_name = "PATH")]
    tls_key_file: Option<PathBuf>,
    #[arg(long, global = true, env = "CASSANDRA_TLS_CA", value_name = "PATH")]
    tls_ca_file: Option<PathBuf>,
    #[arg(long, global = true, env = "CASSANDRA_TLS_VERIFY_HOST", default_value_t = false)]
    tls_enable_host_verification: bool,
}

impl ConnectionArgs {
    fn apply_to(&self, target: &mut ConnectionTarget) {
        if let Some(hosts) = &self.hosts {
            target.hosts = hosts.clone();
        }
        if let Some(port) = self.port {
            target.port = port;
        }
        if let Some(user) = &self.user {
            target.user = user.clone();
        }
        if let Some(password) = &self.password {
            target.password = password.clone();
        }
        if let Some(keyspace) = &self.keyspace {
            target.keyspace = keyspace.clone();
        }
        if let Some(protocol_version) = self.protocol_version {
            target.protocol_version = protocol_version;
        }
        if let Some(timeout) = self.timeout {
            target.timeout_secs = timeout;
        }
        if self.tls {
            target.tls.enabled = true;
        }
        if let Some(path) = &self.tls_cert_file {
            target.tls.cert_file = Some(path.clone());
        }
        if let Some(path) = &self.tls_key_file {
            target.tls.key_file = Some(path.clone());
        }
        if let Some(path) = &self.tls_ca_file {
            target.tls.ca_file = Some(path.clone());
        }
        if self.tls_enable_host_verification {
            target.tls.enable_host_verification = true;
        }
    }
}

#[derive(Args, Debug)]
struct CreateKeyspaceArgs {
    #[arg(long, visible_alias = "rf")]
    replication_factor: Option<u32>,
    /// Datacenter for network topology replication.
    #[arg(long, visible_alias = "dc")]
    datacenter: Option<String>,
}

#[derive(Args, Debug)]
struct SetupSchemaArgs {
    /// CQL file to apply.
    #[arg(short = 'f', long, value_name = "PATH")]
    schema_file: Option<String>,
    /// Initial schema version, e.g. 0.1.
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    initial_version: Option<String>,
    /// Apply the schema file without version tracking.
    #[arg(short = 'd', long, default_value_t = false)]
    disable_versioning: bool,
    /// Drop existing tables before applying the schema.
    #[arg(short = 'o', long, default_value_t = false)]
    overwrite: bool,
}

#[derive(Args, Debug)]
struct UpdateSchemaArgs {
    /// Directory holding versioned schema changes.
    #[arg(short = 'd', long, value_name = "PATH")]
    schema_dir: Option<String>,
    /// Version to migrate up to; defaults to the latest.
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    target_version: Option<String>,
    /// Report the changes without applying them.
    #[arg(short = 'y', long = "dryrun", default_value_t = false)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            eprintln!("{err}");
            if matches!(err, CliError::Config(_)) {
                eprintln!("hint: run `cqlschema <command> --help` to list the required flags");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::ConfigSchema = cli.command {
        let json = serde_json::to_string_pretty(&config_json_schema())?;
        println!("{json}");
        return Ok(());
    }

    init_logging(LogOptions {
        quiet: cli.quiet,
        format: cli.log_format,
        file: cli.log_file.as_deref(),
    })?;

    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();
    let file = load_file_config(cli.config.as_deref())?;
    let config_file = cli
        .config
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    tracing::info!(event = "run_started", run_id = %run_id, config_file = %config_file);

    let mut executor = DryRunExecutor::new(std::io::stdout().lock());
    tracing::info!(event = "executor_selected", executor = executor.name());

    match &cli.command {
        Command::CreateKeyspace(args) => {
            let config = keyspace_config(&file, &cli.connection, args);
            log_target(&config.target);
            let plan = validate_create_keyspace_config(&config)?;
            tracing::info!(event = "config_validated", command = "create-keyspace");
            executor.create_keyspace(&plan)?;
        }
        Command::SetupSchema(args) => {
            let config = setup_config(&file, &cli.connection, args);
            log_target(&config.target);
            let plan = validate_setup_config(&config)?;
            tracing::info!(event = "config_validated", command = "setup-schema");
            executor.setup_schema(&plan)?;
        }
        Command::UpdateSchema(args) => {
            let config = update_config(&file, &cli.connection, args);
            log_target(&config.target);
            let plan = validate_update_config(&config)?;
            tracing::info!(event = "config_validated", command = "update-schema");
            executor.update_schema(&plan)?;
        }
        Command::ConfigSchema => {}
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "run_finished",
        status = "success",
        run_id = %run_id,
        duration_ms = duration_ms
    );

    Ok(())
}

fn log_target(target: &ConnectionTarget) {
    let redacted = redact_target(target);
    tracing::debug!(event = "target_resolved", target = %redacted.redacted, tls = redacted.tls);
}

fn keyspace_config(
    file: &FileConfig,
    connection: &ConnectionArgs,
    args: &CreateKeyspaceArgs,
) -> CreateKeyspaceConfig {
    let mut config = file.keyspace_config();
    connection.apply_to(&mut config.target);
    if let Some(replication_factor) = args.replication_factor {
        config.replication_factor = replication_factor;
    }
    if let Some(datacenter) = &args.datacenter {
        config.datacenter = datacenter.clone();
    }
    config
}

fn setup_config(
    file: &FileConfig,
    connection: &ConnectionArgs,
    args: &SetupSchemaArgs,
) -> SetupSchemaConfig {
    let mut config = file.setup_config();
    connection.apply_to(&mut config.target);
    if let Some(schema_file) = &args.schema_file {
        config.schema_file_path = schema_file.clone();
    }
    if let Some(initial_version) = &args.initial_version {
        config.initial_version = initial_version.clone();
    }
    if args.disable_versioning {
        config.disable_versioning = true;
    }
    if args.overwrite {
        config.overwrite = true;
    }
    config
}

fn update_config(
    file: &FileConfig,
    connection: &ConnectionArgs,
    args: &UpdateSchemaArgs,
) -> UpdateSchemaConfig {
    let mut config = file.update_config();
    connection.apply_to(&mut config.target);
    if let Some(schema_dir) = &args.schema_dir {
        config.schema_dir = schema_dir.clone();
    }
    if let Some(target_version) = &args.target_version {
        config.target_version = target_version.clone();
    }
    if args.dry_run {
        config.dry_run = true;
    }
    config
}
