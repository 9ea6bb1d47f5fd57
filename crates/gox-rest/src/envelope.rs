//! Response envelope and generic decoding
//!
//! Every response is wrapped as
//! `{"result": "success"|"error", "token": ..., "error": ..., "return": ...}`.
//! One decoder handles every payload type.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::{RestError, RestResult};

/// Status reported in the `result` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// Response envelope
///
/// Missing optional fields decode as `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "result")]
    pub status: ResultStatus,
    /// Error token (e.g. `bad_request`)
    pub token: Option<String>,
    /// Error text; non-null means the operation failed
    pub error: Option<String>,
    #[serde(rename = "return")]
    pub payload: Option<T>,
}

impl<T> Envelope<T> {
    /// Returns true if the envelope carries no error
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status == ResultStatus::Success
    }

    /// Unwrap the payload, surfacing server-reported errors
    ///
    /// A non-null `error` always wins, whatever `result` and `return` say.
    pub fn into_result(self) -> RestResult<T> {
        if let Some(message) = self.error {
            return Err(RestError::protocol(self.token, message));
        }
        if self.status == ResultStatus::Error {
            return Err(RestError::protocol(self.token, "unknown error"));
        }

        self.payload
            .ok_or_else(|| RestError::Decode("envelope has no return payload".to_string()))
    }
}

/// Decode an envelope from a complete response body
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> RestResult<Envelope<T>> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode an envelope from a byte stream
///
/// IO failures while reading surface as transport errors, malformed input
/// as decode errors.
pub fn decode_reader<T: DeserializeOwned, R: Read>(reader: R) -> RestResult<Envelope<T>> {
    Ok(serde_json::from_reader(reader)?)
}
