//! Funding endpoints for withdrawals
//!
//! These endpoints require authentication.

use gox_auth::{RequestParams, RequestSigner};
use gox_types::SendTransaction;
use tracing::{info, instrument};

use crate::command::{resolve, RestCommand};
use crate::error::RestResult;
use crate::transport::Transport;

/// Funding endpoints for withdrawals
pub struct FundingEndpoints<'a> {
    transport: &'a Transport,
    signer: &'a RequestSigner,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(transport: &'a Transport, signer: &'a RequestSigner) -> Self {
        Self { transport, signer }
    }

    /// Send BTC to an address
    ///
    /// # Arguments
    /// * `request` - A [`SendFundsRequest`](crate::SendFundsRequest) or raw
    ///   parameters (`address`, `amount_int`, optional `fee_int`, `no_instant`, `green`)
    #[instrument(skip(self, request))]
    pub async fn send_funds(
        &self,
        request: impl Into<RequestParams>,
    ) -> RestResult<SendTransaction> {
        let endpoint = resolve("", RestCommand::SendFunds)?;
        let transaction: SendTransaction = self
            .transport
            .call(&endpoint, request.into(), Some(self.signer))
            .await?;
        info!(trx = %transaction.trx, "Funds sent");
        Ok(transaction)
    }
}
