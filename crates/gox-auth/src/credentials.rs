//! Authentication credentials
//!
//! Implements the HMAC-SHA512 signing used by private endpoints.
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the API key
const API_KEY_VAR: &str = "GOX_API_KEY";
/// Environment variable holding the base64 API secret
const API_SECRET_VAR: &str = "GOX_API_SECRET";

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Secret (decoded from base64, zeroized on drop)
    secret: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create new credentials from API key and secret
    ///
    /// # Arguments
    /// * `api_key` - Your API key
    /// * `secret` - Your API secret (base64 encoded string)
    pub fn new(api_key: impl Into<String>, secret: impl AsRef<str>) -> AuthResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("Empty API key".to_string()));
        }

        let decoded = BASE64
            .decode(secret.as_ref().trim())
            .map_err(|e| AuthError::InvalidCredentials(format!("Invalid base64 secret: {}", e)))?;

        Ok(Self::from_raw(api_key, decoded))
    }

    /// Create credentials from an already decoded secret
    pub fn from_raw(api_key: impl Into<String>, secret: Vec<u8>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: SecretBox::new(Box::new(secret)),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `GOX_API_KEY` and `GOX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_VAR.to_string()))?;
        let secret = std::env::var(API_SECRET_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_VAR.to_string()))?;

        Self::new(api_key, secret)
    }

    /// Returns true if both environment variables are set
    pub fn env_present() -> bool {
        std::env::var_os(API_KEY_VAR).is_some() && std::env::var_os(API_SECRET_VAR).is_some()
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the request signature over an encoded body
    ///
    /// Returns base64(HMAC-SHA512(secret, body)).
    pub fn sign(&self, body: &[u8]) -> AuthResult<String> {
        let mut mac = HmacSha512::new_from_slice(self.secret.expose_secret())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(body);

        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self::from_raw(self.api_key.clone(), self.secret.expose_secret().clone())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(idx, _)| &self.api_key[..idx]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
