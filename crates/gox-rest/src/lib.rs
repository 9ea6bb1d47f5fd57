//! Signed REST client for the Mt.Gox HTTP API v1
//!
//! This crate provides a REST client for market data and account
//! operations: ticker, full order book, currency metadata, order placement
//! and lookup, account info, and BTC withdrawals.
//!
//! # Pipeline
//!
//! Every operation follows the same steps:
//!
//! 1. [`resolve`] maps the currency and [`RestCommand`] to an [`Endpoint`]
//! 2. Parameters are built (typed builders in [`requests`], or raw [`RequestParams`])
//! 3. Public endpoints are fetched plainly; private ones are signed with HMAC-SHA512
//! 4. The body is decoded into an [`Envelope`] by one generic [`decode`] routine
//! 5. A non-null `error` becomes [`RestError::Protocol`] (`"<token>: <error>"`)
//!
//! Each call is one request/response cycle. There is no retry, caching or
//! rate limiting inside the client; [`RestError::kind`] tells callers which
//! failures came from the transport, the decoder or the server.
//!
//! # Example
//!
//! ```no_run
//! use gox_rest::{Credentials, GoxRestClient, OrderRequest, OrderSide};
//! use gox_rest::Currency;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = GoxRestClient::new()?;
//!     let ticker = client.get_ticker("USD").await?;
//!     println!("BTC/USD last: {}", ticker.last.value);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = GoxRestClient::with_credentials(creds)?;
//!     let order = OrderRequest::limit(OrderSide::Bid, Decimal::ONE, ticker.buy.value, Currency::Usd)?;
//!     let oid = auth_client.place_order("USD", order).await?;
//!     println!("Order id: {}", oid);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod requests;
mod transport;

// Re-export main types
pub use client::GoxRestClient;
pub use command::{resolve, resolve_named, Access, Endpoint, RestCommand};
pub use config::ClientConfig;
pub use envelope::{decode, decode_reader, Envelope, ResultStatus};
pub use error::{ErrorKind, RestError, RestResult};
pub use requests::{OrderRequest, OrderResultRequest, SendFundsRequest};

pub use gox_auth::{Credentials, NonceSource, RequestParams, RequestSigner};

// Re-export payload types
pub use gox_types::{
    // Market data
    Amount, Currency, CurrencyInfo, DepthEntry, FullDepth, Ticker,
    // Account
    AccountInfo, Order, OrderResult, OrderSide, OrderTrade, SendTransaction, Wallet,
};
