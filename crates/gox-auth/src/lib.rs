//! Request signing and credentials for the Mt.Gox HTTP API v1
//!
//! Private endpoints expect a URL-encoded POST body carrying a strictly
//! increasing `nonce`, plus two headers: `Rest-Key` (the API key) and
//! `Rest-Sign` (base64 HMAC-SHA512 of the exact body bytes, keyed with the
//! base64-decoded API secret).
//!
//! # Example
//!
//! ```no_run
//! use gox_auth::{Credentials, RequestParams, RequestSigner};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let signer = RequestSigner::new(creds);
//!
//! let mut params = RequestParams::new().with("type", "bid");
//! let signed = signer.sign(&mut params)?;
//! println!("POST body: {}", signed.body);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;
mod params;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::NonceSource;
pub use params::{RequestParams, NONCE_KEY};
pub use signer::{RequestSigner, SignedRequest, CONTENT_TYPE, KEY_HEADER, SIGN_HEADER};
