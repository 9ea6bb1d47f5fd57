//! Monetary value object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A value as reported by the exchange
///
/// Every amount and price is sent in several forms at once; `value` is the
/// decimal form, `value_int` the integer units used in requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal value
    pub value: Decimal,
    /// Value in integer units
    pub value_int: String,
    /// Human readable value with currency symbol
    pub display: String,
    /// Shortened display form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_short: Option<String>,
    /// Currency code (`BTC`, `USD`, ...)
    pub currency: String,
}

impl Amount {
    /// Integer units, if the server sent a well-formed integer
    pub fn int_value(&self) -> Option<i64> {
        self.value_int.parse().ok()
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}
