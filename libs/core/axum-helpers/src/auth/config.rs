//! JWT configuration, loaded through `core_config::FromEnv` like the other
//! config structs in the workspace.

use core_config::{ConfigError, FromEnv, env_parse, env_required};

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;
/// One year
pub const MAX_EXPIRES_IN_SECS: i64 = 365 * 24 * 3600;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `JWT_EXPIRES_IN` (default: 3600) - token lifetime in seconds, at most one year
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars")?;
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Seconds between `iat` and `exp`
    pub expires_in_secs: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        check_secret(&secret)?;
        Ok(Self {
            secret,
            expires_in_secs: DEFAULT_EXPIRES_IN_SECS,
        })
    }

    pub fn with_expires_in(mut self, secs: i64) -> Self {
        self.expires_in_secs = secs;
        self
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {} characters (got {}). Generate one with: openssl rand -base64 32",
                MIN_SECRET_LEN,
                secret.len()
            ),
        });
    }
    Ok(())
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        check_secret(&secret)?;

        let expires_in_secs: i64 = env_parse("JWT_EXPIRES_IN", "3600")?;
        if !(1..=MAX_EXPIRES_IN_SECS).contains(&expires_in_secs) {
            return Err(ConfigError::ParseError {
                key: "JWT_EXPIRES_IN".to_string(),
                details: format!("must be between 1 and {MAX_EXPIRES_IN_SECS} seconds"),
            });
        }

        Ok(Self {
            secret,
            expires_in_secs,
        })
    }
}
