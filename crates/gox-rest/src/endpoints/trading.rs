//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use gox_auth::{RequestParams, RequestSigner};
use gox_types::OrderResult;
use tracing::{debug, info, instrument};

use crate::command::{resolve, RestCommand};
use crate::error::RestResult;
use crate::transport::Transport;

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    transport: &'a Transport,
    signer: &'a RequestSigner,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport, signer: &'a RequestSigner) -> Self {
        Self { transport, signer }
    }

    /// Place an order
    ///
    /// # Arguments
    /// * `currency` - Quote currency of the market
    /// * `order` - An [`OrderRequest`](crate::OrderRequest) or raw parameters
    ///   (`type`, `amount_int`, optional `price_int`)
    ///
    /// # Returns
    /// The new order id
    #[instrument(skip(self, order))]
    pub async fn place_order(
        &self,
        currency: &str,
        order: impl Into<RequestParams>,
    ) -> RestResult<String> {
        let endpoint = resolve(currency, RestCommand::PrivateOrderAdd)?;
        let params = order.into();

        debug!(
            "Placing {} order for {} on {}",
            params.get("type").unwrap_or("?"),
            params.get("amount_int").unwrap_or("?"),
            currency
        );

        let oid: String = self
            .transport
            .call(&endpoint, params, Some(self.signer))
            .await?;
        info!(%oid, "Order accepted");
        Ok(oid)
    }

    /// Get the execution result of an order
    ///
    /// # Arguments
    /// * `request` - An [`OrderResultRequest`](crate::OrderResultRequest) or raw
    ///   parameters (`type`, `order`)
    #[instrument(skip(self, request))]
    pub async fn get_order_result(
        &self,
        request: impl Into<RequestParams>,
    ) -> RestResult<OrderResult> {
        let endpoint = resolve("", RestCommand::PrivateOrderResult)?;
        let params = request.into();
        debug!("Fetching result for order {}", params.get("order").unwrap_or("?"));
        self.transport
            .call(&endpoint, params, Some(self.signer))
            .await
    }
}
