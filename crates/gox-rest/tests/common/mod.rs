//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by the live API.

#![allow(dead_code)]

use gox_rest::{ClientConfig, Credentials, GoxRestClient};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "0c5bd1a4-6a1e-4b59-9f4e-3a6f1b2c8d7e";
/// base64("secret-key-for-tests")
pub const API_SECRET: &str = "c2VjcmV0LWtleS1mb3ItdGVzdHM=";

/// Install a test subscriber once; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).expect("valid test credentials")
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(format!("{}/api/1", server.uri()))
        .with_timeout(5)
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> GoxRestClient {
    GoxRestClient::with_config(config_for(server)).expect("client")
}

/// Client with test credentials pointed at the mock server
pub fn signed_client(server: &MockServer) -> GoxRestClient {
    GoxRestClient::with_config(config_for(server).with_credentials(credentials())).expect("client")
}

/// Wrap a payload in a success envelope
pub fn success(payload: Value) -> Value {
    json!({ "result": "success", "return": payload })
}

/// Build an error envelope
pub fn failure(token: &str, error: &str) -> Value {
    json!({ "result": "error", "token": token, "error": error })
}

pub fn amount(value: &str, value_int: &str, currency: &str) -> Value {
    json!({
        "value": value,
        "value_int": value_int,
        "display": format!("{} {}", value, currency),
        "display_short": format!("{} {}", value, currency),
        "currency": currency
    })
}

pub fn ticker_payload() -> Value {
    json!({
        "high": amount("95.00000", "9500000", "USD"),
        "low": amount("88.10000", "8810000", "USD"),
        "avg": amount("91.44620", "9144620", "USD"),
        "vwap": amount("91.71355", "9171355", "USD"),
        "vol": amount("65231.92140611", "6523192140611", "BTC"),
        "last_local": amount("93.59000", "9359000", "USD"),
        "last_orig": amount("93.59000", "9359000", "USD"),
        "last_all": amount("93.59000", "9359000", "USD"),
        "last": amount("93.59000", "9359000", "USD"),
        "buy": amount("93.50001", "9350001", "USD"),
        "sell": amount("93.59000", "9359000", "USD"),
        "now": "1364689759572564"
    })
}

pub fn full_depth_payload() -> Value {
    json!({
        "asks": [
            {"price": 93.59, "amount": 0.5, "price_int": "9359000", "amount_int": "50000000", "stamp": "1364689759572564"},
            {"price": 94.0, "amount": 12.25, "price_int": "9400000", "amount_int": "1225000000", "stamp": "1364689759572565"}
        ],
        "bids": [
            {"price": 92.8, "amount": 3, "price_int": "9280000", "amount_int": "300000000", "stamp": "1364689759572566"},
            {"price": 93.50001, "amount": 1.1, "price_int": "9350001", "amount_int": "110000000", "stamp": "1364689759572567"}
        ],
        "filter_min_price": amount("84.23100", "8423100", "USD"),
        "filter_max_price": amount("102.94900", "10294900", "USD")
    })
}

pub fn currency_info_payload() -> Value {
    json!({
        "currency": "USD",
        "name": "Dollar",
        "symbol": "$",
        "decimals": "5",
        "display_decimals": "2",
        "symbol_position": "before",
        "virtual": "N",
        "ticker": "BTCUSD",
        "depth": "BTCUSD"
    })
}

pub fn account_info_payload() -> Value {
    json!({
        "Login": "alice",
        "Index": "281234",
        "Id": "a1b2c3d4-0000-4000-8000-123456789abc",
        "Rights": ["deposit", "get_info", "trade", "withdraw"],
        "Language": "en_US",
        "Created": "2011-06-01 10:00:00",
        "Last_Login": "2013-04-12 08:30:00",
        "Wallets": {
            "BTC": {
                "Balance": amount("12.50000000", "1250000000", "BTC"),
                "Operations": 42,
                "Daily_Withdraw_Limit": amount("100.00000000", "10000000000", "BTC"),
                "Monthly_Withdraw_Limit": null,
                "Max_Withdraw": amount("100.00000000", "10000000000", "BTC"),
                "Open_Orders": amount("0.50000000", "50000000", "BTC")
            },
            "USD": {
                "Balance": amount("1520.30000", "152030000", "USD"),
                "Operations": 7
            }
        },
        "Trade_Fee": 0.6
    })
}

pub fn open_orders_payload() -> Value {
    json!([
        {
            "oid": "7c8a2b34-9a1f-4e4d-8a7b-0d8c5b0a1f2e",
            "currency": "USD",
            "item": "BTC",
            "type": "ask",
            "amount": amount("0.50000000", "50000000", "BTC"),
            "effective_amount": amount("0.50000000", "50000000", "BTC"),
            "price": amount("99.00000", "9900000", "USD"),
            "status": "open",
            "date": 1365730885,
            "priority": "1365730885503117",
            "actions": []
        }
    ])
}

pub fn order_result_payload() -> Value {
    json!({
        "order_id": "7c8a2b34-9a1f-4e4d-8a7b-0d8c5b0a1f2e",
        "trades": [
            {
                "trade_id": "1365730885503117",
                "primary": "Y",
                "currency": "USD",
                "type": "bid",
                "properties": "limit",
                "item": "BTC",
                "amount": amount("1.00000000", "100000000", "BTC"),
                "price": amount("93.59000", "9359000", "USD"),
                "spent": amount("93.59000", "9359000", "USD"),
                "date": "2013-04-12 08:35:12"
            }
        ],
        "total_amount": amount("1.00000000", "100000000", "BTC"),
        "total_spent": amount("93.59000", "9359000", "USD"),
        "avg_cost": amount("93.59000", "9359000", "USD")
    })
}

/// Extract a form field from a URL-encoded body
pub fn form_field<'a>(body: &'a str, name: &str) -> Option<&'a str> {
    body.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}
