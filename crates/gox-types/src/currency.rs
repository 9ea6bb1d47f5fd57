//! Supported currencies and integer unit scaling
//!
//! The exchange quotes every market as BTC against a fiat currency and
//! accepts quantities in integer units (`amount_int`, `price_int`). BTC
//! amounts use 1e8 units; prices use 1e5 units, except JPY and SEK which
//! use 1e3.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TypesError, TypesResult};

/// The traded item on every market
pub const BTC: &str = "BTC";

/// Integer units per BTC
pub const BTC_SCALE: i64 = 100_000_000;

/// Fiat currencies the exchange lists against BTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Dkk,
    Hkd,
    Nzd,
    Pln,
    Rub,
    Sek,
    Sgd,
    Thb,
    Nok,
    Czk,
}

impl Currency {
    /// Every supported currency
    pub const ALL: [Currency; 18] = [
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Jpy,
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
        Self::Dkk,
        Self::Hkd,
        Self::Nzd,
        Self::Pln,
        Self::Rub,
        Self::Sek,
        Self::Sgd,
        Self::Thb,
        Self::Nok,
        Self::Czk,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Cny => "CNY",
            Self::Dkk => "DKK",
            Self::Hkd => "HKD",
            Self::Nzd => "NZD",
            Self::Pln => "PLN",
            Self::Rub => "RUB",
            Self::Sek => "SEK",
            Self::Sgd => "SGD",
            Self::Thb => "THB",
            Self::Nok => "NOK",
            Self::Czk => "CZK",
        }
    }

    /// Parse a currency code, case-insensitively
    pub fn parse(code: &str) -> TypesResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| TypesError::UnsupportedCurrency(code.to_string()))
    }

    /// Market name for this currency (e.g. `BTCUSD`)
    pub fn market(&self) -> String {
        format!("{}{}", BTC, self.code())
    }

    /// Integer units per one unit of this currency in `price_int` fields
    pub fn price_scale(&self) -> i64 {
        match self {
            Self::Jpy | Self::Sek => 1_000,
            _ => 100_000,
        }
    }

    /// Convert a decimal price into integer units
    pub fn price_to_int(&self, price: Decimal) -> TypesResult<i64> {
        to_int(price, self.price_scale())
    }

    /// Convert integer price units back into a decimal
    pub fn price_from_int(&self, price_int: i64) -> Decimal {
        Decimal::from(price_int) / Decimal::from(self.price_scale())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl FromStr for Currency {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Convert a BTC quantity into integer units
pub fn btc_to_int(amount: Decimal) -> TypesResult<i64> {
    to_int(amount, BTC_SCALE)
}

/// Scale a decimal by `scale` and truncate to an integer
pub fn to_int(value: Decimal, scale: i64) -> TypesResult<i64> {
    value
        .checked_mul(Decimal::from(scale))
        .and_then(|scaled| scaled.trunc().to_i64())
        .ok_or_else(|| TypesError::OutOfRange {
            value: value.to_string(),
            scale,
        })
}
