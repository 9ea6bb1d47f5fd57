//! Error types for parsing shared values

use thiserror::Error;

/// Errors raised while parsing codes and tags used by the API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// Currency code is not one the exchange trades against BTC
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Order side was neither `bid` nor `ask`
    #[error("Invalid order side: {0}")]
    InvalidSide(String),

    /// Decimal value cannot be expressed in integer units
    #[error("Value {value} out of range for scale {scale}")]
    OutOfRange { value: String, scale: i64 },
}

/// Result type for type conversions
pub type TypesResult<T> = Result<T, TypesError>;
