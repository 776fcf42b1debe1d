use super::config::JwtConfig;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    pub iat: i64,    // Issued at
    pub exp: i64,    // Expiration time
}

#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error("token lifetime of {0} seconds is out of range")]
    ExpiryOutOfRange(i64),

    #[error(transparent)]
    Signing(#[from] Error),
}

/// A freshly signed token together with the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub claims: JwtClaims,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expires_in_secs: i64,
}

/// HS256 token signer and verifier.
///
/// Built once at startup from [`JwtConfig`] and handed to whoever needs it:
/// the token endpoint to issue, the auth middleware to verify.
#[derive(Clone)]
pub struct JwtAuth {
    keys: Arc<Keys>,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        tracing::info!(expires_in_secs = config.expires_in_secs, "JWT auth initialized");

        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(config.secret.as_bytes()),
                decoding: DecodingKey::from_secret(config.secret.as_bytes()),
                validation,
                expires_in_secs: config.expires_in_secs,
            }),
        }
    }

    /// Sign arbitrary claims with the configured secret.
    pub fn sign(&self, claims: &JwtClaims) -> Result<String, Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.keys.encoding)
    }

    /// Issue a token for `subject`, valid from now for the configured TTL.
    pub fn issue(&self, subject: impl Into<String>) -> Result<IssuedToken, IssueError> {
        let ttl = self.keys.expires_in_secs;
        let now = Utc::now();
        let expires_at = TimeDelta::try_seconds(ttl)
            .and_then(|delta| now.checked_add_signed(delta))
            .ok_or(IssueError::ExpiryOutOfRange(ttl))?;

        let claims = JwtClaims {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = self.sign(&claims)?;
        Ok(IssuedToken {
            access_token,
            claims,
        })
    }

    /// Check signature, algorithm and expiry, then return the claims.
    pub fn verify(&self, token: &str) -> Result<JwtClaims, Error> {
        let data = decode::<JwtClaims>(token, &self.keys.decoding, &self.keys.validation)?;
        Ok(data.claims)
    }
}
