//! Logical commands and endpoint resolution
//!
//! Maps a (currency, command) pair to a concrete request target. Pure:
//! nothing here touches the network.

use gox_types::Currency;
use reqwest::Method;
use std::fmt;
use std::str::FromStr;

use crate::error::{RestError, RestResult};

/// Exchange operations independent of their URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestCommand {
    Ticker,
    FullDepth,
    CurrencyInfo,
    PrivateOrderAdd,
    PrivateOrderResult,
    PrivateOrders,
    PrivateInfo,
    SendFunds,
}

/// Whether an endpoint needs a signed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

impl RestCommand {
    /// Every supported command
    pub const ALL: [RestCommand; 8] = [
        Self::Ticker,
        Self::FullDepth,
        Self::CurrencyInfo,
        Self::PrivateOrderAdd,
        Self::PrivateOrderResult,
        Self::PrivateOrders,
        Self::PrivateInfo,
        Self::SendFunds,
    ];

    /// Path segment after the market (or `generic`) prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::FullDepth => "fulldepth",
            Self::CurrencyInfo => "currency",
            Self::PrivateOrderAdd => "private/order/add",
            Self::PrivateOrderResult => "private/order/result",
            Self::PrivateOrders => "private/orders",
            Self::PrivateInfo => "private/info",
            Self::SendFunds => "bitcoin/send_simple",
        }
    }

    /// Returns true if the target path is built from the currency's market
    pub fn is_market_scoped(&self) -> bool {
        matches!(self, Self::Ticker | Self::FullDepth | Self::PrivateOrderAdd)
    }

    /// Returns true if the command takes a currency code
    pub fn uses_currency(&self) -> bool {
        self.is_market_scoped() || matches!(self, Self::CurrencyInfo)
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Ticker | Self::FullDepth | Self::CurrencyInfo => Access::Public,
            _ => Access::Private,
        }
    }
}

impl fmt::Display for RestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestCommand {
    type Err = RestError;

    /// Accepts the path form (`private/order/add`) or the dashed form
    /// (`private-order-add`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let command = match normalized.as_str() {
            "ticker" => Self::Ticker,
            "fulldepth" | "full-depth" => Self::FullDepth,
            "currency" | "currency-info" => Self::CurrencyInfo,
            "private/order/add" | "private-order-add" => Self::PrivateOrderAdd,
            "private/order/result" | "private-order-result" => Self::PrivateOrderResult,
            "private/orders" | "private-orders" => Self::PrivateOrders,
            "private/info" | "private-info" => Self::PrivateInfo,
            "bitcoin/send_simple" | "send-funds" => Self::SendFunds,
            _ => {
                return Err(RestError::UnsupportedCommand {
                    command: s.to_string(),
                    currency: String::new(),
                })
            }
        };
        Ok(command)
    }
}

/// A resolved request target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub command: RestCommand,
    pub method: Method,
    /// Path relative to the API base URL
    pub path: String,
    pub access: Access,
    /// Traded currency the command was resolved for, if any
    pub currency: Option<Currency>,
}

impl Endpoint {
    pub fn is_private(&self) -> bool {
        self.access == Access::Private
    }
}

/// Resolve a command for a currency
///
/// Currency-agnostic commands ignore `currency` entirely (an empty string is
/// fine). Market commands fail with [`RestError::UnsupportedCommand`] when
/// the currency is not traded. Currency info takes any three-letter code,
/// `BTC` included.
pub fn resolve(currency: &str, command: RestCommand) -> RestResult<Endpoint> {
    let unsupported = || RestError::UnsupportedCommand {
        command: command.to_string(),
        currency: currency.to_string(),
    };

    let parsed = if command.is_market_scoped() {
        Some(Currency::parse(currency).map_err(|_| unsupported())?)
    } else if command.uses_currency() {
        if !is_currency_code(currency) {
            return Err(unsupported());
        }
        Currency::parse(currency).ok()
    } else {
        None
    };

    let prefix = match parsed {
        Some(currency) if command.is_market_scoped() => currency.market(),
        _ => "generic".to_string(),
    };

    let (method, access) = match command.access() {
        Access::Public => (Method::GET, Access::Public),
        Access::Private => (Method::POST, Access::Private),
    };

    Ok(Endpoint {
        command,
        method,
        path: format!("{}/{}", prefix, command.as_str()),
        access,
        currency: parsed,
    })
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Resolve a command given by name
pub fn resolve_named(currency: &str, command: &str) -> RestResult<Endpoint> {
    let parsed = command.parse::<RestCommand>().map_err(|_| RestError::UnsupportedCommand {
        command: command.to_string(),
        currency: currency.to_string(),
    })?;
    resolve(currency, parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_market_paths() {
        let ticker = resolve("USD", RestCommand::Ticker).unwrap();
        assert_eq!(ticker.path, "BTCUSD/ticker");
        assert_eq!(ticker.method, Method::GET);
        assert!(!ticker.is_private());

        let depth = resolve("eur", RestCommand::FullDepth).unwrap();
        assert_eq!(depth.path, "BTCEUR/fulldepth");

        let add = resolve("JPY", RestCommand::PrivateOrderAdd).unwrap();
        assert_eq!(add.path, "BTCJPY/private/order/add");
        assert_eq!(add.method, Method::POST);
        assert!(add.is_private());
    }

    #[test]
    fn test_currency_info_keeps_currency() {
        let endpoint = resolve("GBP", RestCommand::CurrencyInfo).unwrap();
        assert_eq!(endpoint.path, "generic/currency");
        assert_eq!(endpoint.currency, Some(Currency::Gbp));

        let btc = resolve("BTC", RestCommand::CurrencyInfo).unwrap();
        assert_eq!(btc.path, "generic/currency");
        assert_eq!(btc.currency, None);
        assert!(!btc.is_private());
    }

    #[test]
    fn test_generic_commands_ignore_currency() {
        for command in [
            RestCommand::PrivateOrderResult,
            RestCommand::PrivateOrders,
            RestCommand::PrivateInfo,
            RestCommand::SendFunds,
        ] {
            let with_empty = resolve("", command).unwrap();
            let with_junk = resolve("???", command).unwrap();
            assert_eq!(with_empty, with_junk);
            assert!(with_empty.path.starts_with("generic/"));
            assert!(with_empty.is_private());
            assert_eq!(with_empty.currency, None);
        }
        assert_eq!(
            resolve("", RestCommand::SendFunds).unwrap().path,
            "generic/bitcoin/send_simple"
        );
    }

    #[test]
    fn test_resolver_is_total_on_supported_pairs() {
        for currency in Currency::ALL {
            for command in RestCommand::ALL {
                assert!(resolve(currency.code(), command).is_ok(), "{} {}", currency, command);
            }
        }
    }

    #[test]
    fn test_unsupported_currency() {
        let err = resolve("BTC", RestCommand::Ticker).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedCommand);
        assert!(resolve("", RestCommand::CurrencyInfo).is_err());
        assert!(resolve("US1", RestCommand::CurrencyInfo).is_err());
        assert!(resolve("USDT", RestCommand::CurrencyInfo).is_err());
    }

    #[test]
    fn test_command_names() {
        for command in RestCommand::ALL {
            assert_eq!(command.as_str().parse::<RestCommand>().unwrap(), command);
        }
        assert_eq!(
            "full-depth".parse::<RestCommand>().unwrap(),
            RestCommand::FullDepth
        );
    }

    #[test]
    fn test_undocumented_command() {
        let err = resolve_named("USD", "private/order/cancel").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedCommand);
        assert!(err.to_string().contains("private/order/cancel"));
        assert!(resolve_named("USD", "trades").is_err());
        assert!(resolve_named("USD", "ticker").is_ok());
    }
}
