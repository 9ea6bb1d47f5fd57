//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use gox_auth::RequestParams;
use gox_types::{CurrencyInfo, FullDepth, Ticker};
use tracing::{debug, instrument};

use crate::command::{resolve, RestCommand};
use crate::error::RestResult;
use crate::transport::Transport;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Get ticker information
    ///
    /// # Arguments
    /// * `currency` - Quote currency (e.g., "USD")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, currency: &str) -> RestResult<Ticker> {
        let endpoint = resolve(currency, RestCommand::Ticker)?;
        debug!("Fetching ticker for {}", currency);
        self.transport.call(&endpoint, RequestParams::new(), None).await
    }

    /// Get the full order book
    ///
    /// # Arguments
    /// * `currency` - Quote currency (e.g., "USD")
    #[instrument(skip(self))]
    pub async fn get_full_depth(&self, currency: &str) -> RestResult<FullDepth> {
        let endpoint = resolve(currency, RestCommand::FullDepth)?;
        debug!("Fetching full depth for {}", currency);
        self.transport.call(&endpoint, RequestParams::new(), None).await
    }

    /// Get currency metadata
    ///
    /// # Arguments
    /// * `currency` - Any currency code, including "BTC"
    #[instrument(skip(self))]
    pub async fn get_currency_info(&self, currency: &str) -> RestResult<CurrencyInfo> {
        let endpoint = resolve(currency, RestCommand::CurrencyInfo)?;
        let code = currency.to_ascii_uppercase();
        let params = RequestParams::new().with("currency", code.as_str());

        debug!("Fetching currency info for {}", code);
        self.transport.call(&endpoint, params, None).await
    }
}
