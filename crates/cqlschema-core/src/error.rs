use thiserror::Error;

/// Configuration error returned by every validator.
///
/// Each variant names the first precondition that failed, so callers can
/// show a usage message instead of treating the failure as operational.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The connection target has no hosts.
    #[error("no hosts provided")]
    MissingHosts,
    /// The connection target has no keyspace.
    #[error("no keyspace provided")]
    MissingKeyspace,
    /// Neither an initial version nor disable-versioning was given.
    #[error("either an initial version or disable-versioning must be set")]
    MissingVersioning,
    /// An initial version was given together with disable-versioning.
    #[error("an initial version cannot be set when versioning is disabled")]
    ConflictingVersioning,
    /// Versioning is disabled but no schema file was given.
    #[error("a schema file is required when versioning is disabled")]
    MissingSchemaFile,
    /// The update workflow has no schema directory.
    #[error("no schema directory provided")]
    MissingSchemaDir,
    /// A version token does not match `<digits>.<digits>`.
    #[error("invalid version '{version}', expected x.y with an optional prefix such as v")]
    InvalidVersion { version: String },
}

/// Convenience alias for results returned by the validators.
pub type Result<T> = std::result::Result<T, ConfigError>;
