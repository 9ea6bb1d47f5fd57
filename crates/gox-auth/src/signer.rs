//! Request signer for building authenticated requests

use std::sync::Arc;
use tracing::{trace, warn};

use crate::credentials::Credentials;
use crate::error::AuthResult;
use crate::nonce::NonceSource;
use crate::params::{RequestParams, NONCE_KEY};

/// Header carrying the API key
pub const KEY_HEADER: &str = "Rest-Key";
/// Header carrying the base64 signature
pub const SIGN_HEADER: &str = "Rest-Sign";
/// Content type of signed bodies
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A signed request body with its authentication headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Nonce embedded in the body
    pub nonce: u64,
    /// URL-encoded body, byte-identical to what was signed
    pub body: String,
    /// Value for the `Rest-Key` header
    pub api_key: String,
    /// Value for the `Rest-Sign` header
    pub signature: String,
}

impl SignedRequest {
    /// Headers to attach to the POST
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            (KEY_HEADER, self.api_key.as_str()),
            (SIGN_HEADER, self.signature.as_str()),
            ("Content-Type", CONTENT_TYPE),
        ]
    }
}

/// Signs request parameters with one set of credentials
///
/// By default the nonce source is the process-wide one for the API key, so
/// clones and independently built signers for the same key share it.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Arc<Credentials>,
    nonces: Arc<NonceSource>,
}

impl RequestSigner {
    /// Create a signer using the process-wide nonce source for its API key
    pub fn new(credentials: Credentials) -> Self {
        let nonces = NonceSource::for_key(credentials.api_key());
        Self::with_nonce_source(credentials, nonces)
    }

    /// Create a signer sharing an existing nonce source
    pub fn with_nonce_source(credentials: Credentials, nonces: Arc<NonceSource>) -> Self {
        Self {
            credentials: Arc::new(credentials),
            nonces,
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Get the nonce source
    pub fn nonce_source(&self) -> &Arc<NonceSource> {
        &self.nonces
    }

    /// Sign a parameter map
    ///
    /// Inserts the next nonce into `params` (replacing any caller-supplied
    /// one), encodes the map and signs the encoded bytes.
    pub fn sign(&self, params: &mut RequestParams) -> AuthResult<SignedRequest> {
        let nonce = self.nonces.next();
        if let Some(previous) = params.insert(NONCE_KEY, nonce.to_string()) {
            warn!("Replacing caller supplied nonce {}", previous);
        }

        let body = params.encode()?;
        let signature = self.credentials.sign(body.as_bytes())?;

        trace!(nonce, "Signed request body");

        Ok(SignedRequest {
            nonce,
            body,
            api_key: self.credentials.api_key().to_string(),
            signature,
        })
    }
}
