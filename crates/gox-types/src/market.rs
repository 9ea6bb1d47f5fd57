//! Public market data payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

// ============================================================================
// Ticker
// ============================================================================

/// Ticker snapshot for one market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    /// 24h high
    pub high: Amount,
    /// 24h low
    pub low: Amount,
    /// 24h average
    pub avg: Amount,
    /// Volume weighted average price
    pub vwap: Amount,
    /// 24h volume in BTC
    pub vol: Amount,
    /// Last trade in this currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_local: Option<Amount>,
    /// Last trade in its original currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_orig: Option<Amount>,
    /// Last trade on any market, converted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_all: Option<Amount>,
    /// Last trade price
    pub last: Amount,
    /// Best bid
    pub buy: Amount,
    /// Best ask
    pub sell: Amount,
    /// Server timestamp in microseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now: Option<String>,
}

impl Ticker {
    /// Ask minus bid
    pub fn spread(&self) -> Decimal {
        self.sell.value - self.buy.value
    }

    /// Average of best bid and best ask
    pub fn mid_price(&self) -> Decimal {
        (self.buy.value + self.sell.value) / Decimal::TWO
    }
}

// ============================================================================
// Order Book
// ============================================================================

/// One price level of the full order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthEntry {
    /// Price
    pub price: Decimal,
    /// Quantity in BTC
    pub amount: Decimal,
    /// Price in integer units
    pub price_int: String,
    /// Quantity in integer units
    pub amount_int: String,
    /// Last update timestamp in microseconds
    pub stamp: String,
}

/// Full order book snapshot
///
/// Asks are sorted ascending by price, bids ascending as well (best bid last).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullDepth {
    pub asks: Vec<DepthEntry>,
    pub bids: Vec<DepthEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_min_price: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_max_price: Option<Amount>,
}

impl FullDepth {
    /// Lowest ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(|level| level.price).min()
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(|level| level.price).max()
    }

    /// Best ask minus best bid
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

// ============================================================================
// Currency Metadata
// ============================================================================

/// Currency metadata
///
/// The server sends numeric fields as strings; helpers parse them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub currency: String,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub display_decimals: String,
    pub symbol_position: String,
    #[serde(rename = "virtual")]
    pub is_virtual: String,
    pub ticker: String,
    pub depth: String,
}

impl CurrencyInfo {
    /// Number of decimals in integer units
    pub fn decimals(&self) -> Option<u32> {
        self.decimals.parse().ok()
    }

    /// Number of decimals shown to users
    pub fn display_decimals(&self) -> Option<u32> {
        self.display_decimals.parse().ok()
    }

    /// Returns true for virtual currencies
    pub fn is_virtual(&self) -> bool {
        self.is_virtual == "Y"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amount(value: &str) -> String {
        format!(
            r#"{{"value":"{v}","value_int":"0","display":"${v}","currency":"USD"}}"#,
            v = value
        )
    }

    #[test]
    fn test_ticker_helpers() {
        let json = format!(
            r#"{{"high":{h},"low":{l},"avg":{a},"vwap":{a},"vol":{a},"last":{a},"buy":{b},"sell":{s}}}"#,
            h = amount("100"),
            l = amount("90"),
            a = amount("95"),
            b = amount("94.5"),
            s = amount("95.5"),
        );

        let ticker: Ticker = serde_json::from_str(&json).unwrap();
        assert_eq!(ticker.spread(), dec!(1));
        assert_eq!(ticker.mid_price(), dec!(95));
        assert!(ticker.last_local.is_none());
    }

    #[test]
    fn test_depth_numbers_and_best_levels() {
        let json = r#"{
            "asks": [
                {"price": 94.99, "amount": 0.5, "price_int": "9499000", "amount_int": "50000000", "stamp": "1364689759572564"},
                {"price": 95.2, "amount": 1, "price_int": "9520000", "amount_int": "100000000", "stamp": "1364689759572565"}
            ],
            "bids": [
                {"price": 94.1, "amount": 2, "price_int": "9410000", "amount_int": "200000000", "stamp": "1364689759572566"},
                {"price": 94.5, "amount": 0.25, "price_int": "9450000", "amount_int": "25000000", "stamp": "1364689759572567"}
            ]
        }"#;

        let depth: FullDepth = serde_json::from_str(json).unwrap();
        assert_eq!(depth.best_ask(), Some(dec!(94.99)));
        assert_eq!(depth.best_bid(), Some(dec!(94.5)));
        assert_eq!(depth.spread(), Some(dec!(0.49)));
    }

    #[test]
    fn test_empty_depth() {
        let depth: FullDepth = serde_json::from_str(r#"{"asks": [], "bids": []}"#).unwrap();
        assert!(depth.spread().is_none());
    }

    #[test]
    fn test_currency_info() {
        let json = r#"{
            "currency": "USD",
            "name": "Dollar",
            "symbol": "$",
            "decimals": "5",
            "display_decimals": "2",
            "symbol_position": "before",
            "virtual": "N",
            "ticker": "BTCUSD",
            "depth": "BTCUSD"
        }"#;

        let info: CurrencyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.decimals(), Some(5));
        assert_eq!(info.display_decimals(), Some(2));
        assert!(!info.is_virtual());
    }
}
