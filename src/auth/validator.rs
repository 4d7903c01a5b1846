//! API key validation.

use crate::auth::AuthError;
use crate::config::AuthConfig;

/// Name of the request header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Validates presented API keys against the configured secret.
///
/// Comparison is exact, case-sensitive byte equality. An unset secret
/// rejects every presented key: nothing can equal a value that does not
/// exist.
#[derive(Debug, Clone)]
pub struct ApiKeyValidator {
    secret: Option<String>,
}

impl ApiKeyValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.api_key.clone(),
        }
    }

    /// Classify a presented key.
    ///
    /// Returns the key value on success so callers can attach it to the
    /// request context.
    pub fn validate<'a>(&self, presented: Option<&'a str>) -> Result<&'a str, AuthError> {
        let key = presented.ok_or(AuthError::MissingKey)?;

        match &self.secret {
            Some(secret) if key == secret.as_str() => Ok(key),
            _ => Err(AuthError::InvalidKey),
        }
    }
}
