use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, Result};

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9]?(?P<version>[0-9]+\.[0-9]+)$").expect("version pattern is valid")
});

/// Normalize a user supplied schema version.
///
/// Accepts `<digits>.<digits>`, optionally preceded by a single non-numeric
/// character such as `v`, and returns the dotted digits as written.
/// Callers treat the empty string as "unset" and must not pass it here; doing
/// so yields [`ConfigError::InvalidVersion`] like any other malformed token.
pub fn normalize_version(token: &str) -> Result<String> {
    VERSION_RE
        .captures(token)
        .and_then(|caps| caps.name("version"))
        .map(|found| found.as_str().to_string())
        .ok_or_else(|| ConfigError::InvalidVersion {
            version: token.to_string(),
        })
}
