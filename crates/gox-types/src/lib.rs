//! Shared payload types for the Mt.Gox HTTP API v1
//!
//! This crate provides the data shapes returned inside the API's response
//! envelope. It has minimal dependencies and can be used independently of
//! the HTTP client.
//!
//! # Key Types
//!
//! - [`Amount`] - Monetary value as reported by the exchange (decimal, integer and display forms)
//! - [`Currency`] - Supported fiat currencies and their integer scaling
//! - [`OrderSide`] - Bid/ask
//! - [`Ticker`], [`FullDepth`], [`CurrencyInfo`] - Public market data
//! - [`AccountInfo`], [`Order`], [`OrderResult`], [`SendTransaction`] - Private account data
//! - [`TypesError`] - Parse errors for the types above

pub mod account;
pub mod amount;
pub mod currency;
pub mod enums;
pub mod error;
pub mod market;

// Re-export commonly used types
pub use account::*;
pub use amount::*;
pub use currency::*;
pub use enums::*;
pub use error::*;
pub use market::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
