//! Private account endpoints
//!
//! These endpoints require authentication.

use gox_auth::{RequestParams, RequestSigner};
use gox_types::{AccountInfo, Order};
use tracing::{debug, instrument};

use crate::command::{resolve, RestCommand};
use crate::error::RestResult;
use crate::transport::Transport;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a Transport,
    signer: &'a RequestSigner,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport, signer: &'a RequestSigner) -> Self {
        Self { transport, signer }
    }

    /// Get account info and wallets
    #[instrument(skip(self))]
    pub async fn get_account_info(&self) -> RestResult<AccountInfo> {
        let endpoint = resolve("", RestCommand::PrivateInfo)?;
        self.transport
            .call(&endpoint, RequestParams::new(), Some(self.signer))
            .await
    }

    /// Get open orders across all markets
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self) -> RestResult<Vec<Order>> {
        let endpoint = resolve("", RestCommand::PrivateOrders)?;
        let orders: Vec<Order> = self
            .transport
            .call(&endpoint, RequestParams::new(), Some(self.signer))
            .await?;
        debug!("{} open orders", orders.len());
        Ok(orders)
    }
}
