//! Main REST client implementation

use gox_auth::{Credentials, RequestParams, RequestSigner};
use gox_types::{AccountInfo, CurrencyInfo, FullDepth, Order, OrderResult, SendTransaction, Ticker};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use crate::config::ClientConfig;
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::Transport;

/// Mt.Gox REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap;
/// clones share the HTTP connection pool and the request signer, so nonces
/// stay strictly increasing across all of them.
///
/// # Example
///
/// ```no_run
/// use gox_rest::{Credentials, GoxRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = GoxRestClient::new()?;
///     let ticker = client.get_ticker("USD").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = GoxRestClient::with_credentials(creds)?;
///     let info = auth_client.get_account_info().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GoxRestClient {
    transport: Transport,
    signer: Option<RequestSigner>,
}

impl GoxRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client configured from the environment
    pub fn from_env() -> RestResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let base_url = config.normalized_base_url()?;
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("gox-rest/{}", env!("CARGO_PKG_VERSION")));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()?;

        info!(base_url = %base_url, "Created REST client");

        Ok(Self {
            transport: Transport::new(http_client, base_url),
            signer: config.credentials.map(RequestSigner::new),
        })
    }

    /// Replace the signer, e.g. one with an explicit nonce source
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.signer.is_some()
    }

    /// The signer used for private endpoints
    pub fn signer(&self) -> Option<&RequestSigner> {
        self.signer.as_ref()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    fn require_signer(&self) -> RestResult<&RequestSigner> {
        self.signer.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.transport)
    }

    /// Get ticker information for a currency's market
    pub async fn get_ticker(&self, currency: &str) -> RestResult<Ticker> {
        self.market().get_ticker(currency).await
    }

    /// Get the full order book for a currency's market
    pub async fn get_full_depth(&self, currency: &str) -> RestResult<FullDepth> {
        self.market().get_full_depth(currency).await
    }

    /// Get currency metadata, by code or by [`Currency`](gox_types::Currency)
    pub async fn get_currency_info(&self, currency: impl AsRef<str>) -> RestResult<CurrencyInfo> {
        self.market().get_currency_info(currency.as_ref()).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        Ok(TradingEndpoints::new(&self.transport, self.require_signer()?))
    }

    /// Place an order, returning its id
    pub async fn place_order(
        &self,
        currency: &str,
        order: impl Into<RequestParams>,
    ) -> RestResult<String> {
        self.trading()?.place_order(currency, order).await
    }

    /// Get the execution result of an order
    pub async fn get_order_result(
        &self,
        request: impl Into<RequestParams>,
    ) -> RestResult<OrderResult> {
        self.trading()?.get_order_result(request).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(&self.transport, self.require_signer()?))
    }

    /// Get open orders
    pub async fn get_open_orders(&self) -> RestResult<Vec<Order>> {
        self.account()?.get_open_orders().await
    }

    /// Get account info and wallet balances
    pub async fn get_account_info(&self) -> RestResult<AccountInfo> {
        self.account()?.get_account_info().await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        Ok(FundingEndpoints::new(&self.transport, self.require_signer()?))
    }

    /// Send BTC to an address
    pub async fn send_funds(&self, request: impl Into<RequestParams>) -> RestResult<SendTransaction> {
        self.funding()?.send_funds(request).await
    }
}

impl std::fmt::Debug for GoxRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoxRestClient")
            .field("base_url", &self.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
