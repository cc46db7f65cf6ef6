//! Provider credential resolution
//!
//! Credentials come from flags or the environment (`IPTV_USER` / `IPTV_PASS`).
//! Ad-hoc runs fall back to the provider's shared account; scheduled runs pass
//! `--strict` and refuse to start without real credentials.

use thiserror::Error;
use tracing::debug;

/// Shared account used when no credentials are configured
const DEFAULT_USERNAME: &str = "juno123";
const DEFAULT_PASSWORD: &str = "juno123";

/// Xtream provider credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A required credential is missing
#[derive(Debug, Error)]
#[error("{0} is not set (required with --strict)")]
pub struct CredentialsError(pub &'static str);

impl Credentials {
    /// Resolve credentials from optional flag/env values.
    ///
    /// With `strict`, both values must be present; otherwise missing values
    /// fall back to the shared account.
    pub fn resolve(
        username: Option<String>,
        password: Option<String>,
        strict: bool,
    ) -> Result<Self, CredentialsError> {
        if strict {
            let username = username.ok_or(CredentialsError("IPTV_USER"))?;
            let password = password.ok_or(CredentialsError("IPTV_PASS"))?;
            return Ok(Self { username, password });
        }

        if username.is_none() || password.is_none() {
            debug!("No credentials configured, using shared account");
        }

        Ok(Self {
            username: username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        })
    }
}
