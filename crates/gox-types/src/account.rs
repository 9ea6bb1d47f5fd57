//! Private account payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::amount::Amount;
use crate::enums::OrderSide;

// ============================================================================
// Account Info
// ============================================================================

/// Balance and limits for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(rename = "Balance")]
    pub balance: Amount,
    /// Number of operations on this wallet
    #[serde(rename = "Operations")]
    pub operations: u64,
    #[serde(rename = "Daily_Withdraw_Limit", default, skip_serializing_if = "Option::is_none")]
    pub daily_withdraw_limit: Option<Amount>,
    #[serde(rename = "Monthly_Withdraw_Limit", default, skip_serializing_if = "Option::is_none")]
    pub monthly_withdraw_limit: Option<Amount>,
    #[serde(rename = "Max_Withdraw", default, skip_serializing_if = "Option::is_none")]
    pub max_withdraw: Option<Amount>,
    #[serde(rename = "Open_Orders", default, skip_serializing_if = "Option::is_none")]
    pub open_orders: Option<Amount>,
}

/// Account details and wallets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "Login")]
    pub login: String,
    #[serde(rename = "Index")]
    pub index: String,
    #[serde(rename = "Id")]
    pub id: String,
    /// API key rights (`get_info`, `trade`, `deposit`, `withdraw`, ...)
    #[serde(rename = "Rights", default)]
    pub rights: Vec<String>,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "Last_Login")]
    pub last_login: String,
    /// Wallets keyed by currency code
    #[serde(rename = "Wallets", default)]
    pub wallets: HashMap<String, Wallet>,
    /// Trade fee in percent
    #[serde(rename = "Trade_Fee")]
    pub trade_fee: Decimal,
}

impl AccountInfo {
    /// Balance for a currency code, if the account holds a wallet for it
    pub fn balance(&self, currency: &str) -> Option<&Amount> {
        self.wallets.get(currency).map(|wallet| &wallet.balance)
    }

    /// Returns true if the API key carries the given right
    pub fn has_right(&self, right: &str) -> bool {
        self.rights.iter().any(|r| r == right)
    }
}

// ============================================================================
// Orders
// ============================================================================

/// An open order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order id
    pub oid: String,
    /// Quote currency
    pub currency: String,
    /// Traded item (always `BTC`)
    pub item: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_amount: Option<Amount>,
    /// Limit price; absent for market orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Amount>,
    /// `pending`, `open`, `invalid`, ...
    pub status: String,
    /// Creation time (unix seconds)
    pub date: u64,
    pub priority: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl Order {
    /// Returns true once the order sits on the book
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }
}

/// One fill of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTrade {
    pub trade_id: String,
    /// `Y` if this was the primary market for the fill
    pub primary: String,
    pub currency: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub properties: String,
    pub item: String,
    pub amount: Amount,
    pub price: Amount,
    pub spent: Amount,
    pub date: String,
}

/// Execution summary of a completed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub order_id: String,
    #[serde(default)]
    pub trades: Vec<OrderTrade>,
    pub total_amount: Amount,
    pub total_spent: Amount,
    pub avg_cost: Amount,
}

// ============================================================================
// Funding
// ============================================================================

/// Outgoing BTC transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTransaction {
    /// Transaction hash
    pub trx: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const BTC_AMOUNT: &str =
        r#"{"value":"1.50000000","value_int":"150000000","display":"1.50000000 BTC","currency":"BTC"}"#;

    #[test]
    fn test_account_info() {
        let json = format!(
            r#"{{
                "Login": "alice",
                "Index": "12345",
                "Id": "b0c1d2e3-0000-1111-2222-333344445555",
                "Rights": ["get_info", "trade"],
                "Language": "en_US",
                "Created": "2011-06-01 10:00:00",
                "Last_Login": "2013-04-12 08:30:00",
                "Wallets": {{
                    "BTC": {{"Balance": {b}, "Operations": 42}}
                }},
                "Trade_Fee": 0.6
            }}"#,
            b = BTC_AMOUNT
        );

        let info: AccountInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.balance("BTC").map(|a| a.value), Some(dec!(1.5)));
        assert!(info.balance("USD").is_none());
        assert!(info.has_right("trade"));
        assert!(!info.has_right("withdraw"));
        assert_eq!(info.trade_fee, dec!(0.6));
    }

    #[test]
    fn test_open_order() {
        let json = format!(
            r#"{{
                "oid": "7c8a2b34-9a1f-4e4d-8a7b-0d8c5b0a1f2e",
                "currency": "USD",
                "item": "BTC",
                "type": "ask",
                "amount": {b},
                "status": "open",
                "date": 1365730885,
                "priority": "1365730885503117",
                "actions": []
            }}"#,
            b = BTC_AMOUNT
        );

        let order: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order.side, OrderSide::Ask);
        assert!(order.is_open());
        assert!(order.price.is_none());
    }
}
