//! Typed request builders
//!
//! Each converts into [`RequestParams`]. Operations also accept raw
//! parameter maps, which are sent as-is.

use gox_auth::RequestParams;
use gox_types::{btc_to_int, Currency, OrderSide};
use rust_decimal::Decimal;

use crate::error::{RestError, RestResult};

/// New order parameters
///
/// Quantities are carried in the exchange's integer units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub side: OrderSide,
    /// BTC amount in 1e-8 units
    pub amount_int: i64,
    /// Limit price in the currency's integer units; `None` for market orders
    pub price_int: Option<i64>,
}

impl OrderRequest {
    /// Market order for a BTC amount
    pub fn market(side: OrderSide, amount: Decimal) -> RestResult<Self> {
        Ok(Self {
            side,
            amount_int: positive_btc(amount)?,
            price_int: None,
        })
    }

    /// Limit order for a BTC amount at a price quoted in `currency`
    pub fn limit(
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
        currency: Currency,
    ) -> RestResult<Self> {
        if price <= Decimal::ZERO {
            return Err(RestError::InvalidParameter(format!("price must be positive: {}", price)));
        }
        Ok(Self {
            side,
            amount_int: positive_btc(amount)?,
            price_int: Some(currency.price_to_int(price)?),
        })
    }

    pub fn is_market(&self) -> bool {
        self.price_int.is_none()
    }
}

impl From<OrderRequest> for RequestParams {
    fn from(order: OrderRequest) -> Self {
        let mut params = RequestParams::new()
            .with("type", order.side.as_str())
            .with("amount_int", order.amount_int.to_string());
        params.insert_opt("price_int", order.price_int.map(|p| p.to_string()));
        params
    }
}

/// Lookup of a completed order's execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResultRequest {
    pub side: OrderSide,
    pub order_id: String,
}

impl OrderResultRequest {
    pub fn new(side: OrderSide, order_id: impl Into<String>) -> Self {
        Self {
            side,
            order_id: order_id.into(),
        }
    }
}

impl From<OrderResultRequest> for RequestParams {
    fn from(request: OrderResultRequest) -> Self {
        RequestParams::new()
            .with("type", request.side.as_str())
            .with("order", request.order_id)
    }
}

/// Outgoing BTC transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFundsRequest {
    pub address: String,
    /// BTC amount in 1e-8 units
    pub amount_int: i64,
    /// Miner fee in 1e-8 units
    pub fee_int: Option<i64>,
    /// Skip instant transfer to another account on the exchange
    pub no_instant: bool,
    /// Send through the exchange's green address
    pub green: bool,
}

impl SendFundsRequest {
    pub fn new(address: impl Into<String>, amount: Decimal) -> RestResult<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(RestError::InvalidParameter("address is empty".to_string()));
        }
        Ok(Self {
            address,
            amount_int: positive_btc(amount)?,
            fee_int: None,
            no_instant: false,
            green: false,
        })
    }

    pub fn with_fee(mut self, fee: Decimal) -> RestResult<Self> {
        if fee < Decimal::ZERO {
            return Err(RestError::InvalidParameter(format!("fee must not be negative: {}", fee)));
        }
        self.fee_int = Some(btc_to_int(fee)?);
        Ok(self)
    }

    pub fn no_instant(mut self) -> Self {
        self.no_instant = true;
        self
    }

    pub fn green(mut self) -> Self {
        self.green = true;
        self
    }
}

impl From<SendFundsRequest> for RequestParams {
    fn from(request: SendFundsRequest) -> Self {
        let mut params = RequestParams::new()
            .with("address", request.address)
            .with("amount_int", request.amount_int.to_string());
        params.insert_opt("fee_int", request.fee_int.map(|f| f.to_string()));
        if request.no_instant {
            params.insert("no_instant", "1");
        }
        if request.green {
            params.insert("green", "1");
        }
        params
    }
}

fn positive_btc(amount: Decimal) -> RestResult<i64> {
    let units = btc_to_int(amount)?;
    if units <= 0 {
        return Err(RestError::InvalidParameter(format!("amount must be positive: {}", amount)));
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_order_params() {
        let order = OrderRequest::limit(OrderSide::Bid, dec!(1.5), dec!(93.59), Currency::Usd).unwrap();
        assert!(!order.is_market());

        let params: RequestParams = order.into();
        assert_eq!(params.get("type"), Some("bid"));
        assert_eq!(params.get("amount_int"), Some("150000000"));
        assert_eq!(params.get("price_int"), Some("9359000"));
    }

    #[test]
    fn test_market_order_has_no_price() {
        let params: RequestParams = OrderRequest::market(OrderSide::Ask, dec!(0.01)).unwrap().into();
        assert_eq!(params.get("type"), Some("ask"));
        assert!(!params.contains_key("price_int"));
    }

    #[test]
    fn test_rejects_dust_and_negative() {
        assert!(OrderRequest::market(OrderSide::Bid, dec!(0.000000001)).is_err());
        assert!(OrderRequest::market(OrderSide::Bid, dec!(-1)).is_err());
        assert!(OrderRequest::limit(OrderSide::Bid, dec!(1), dec!(0), Currency::Usd).is_err());
    }

    #[test]
    fn test_order_result_params() {
        let params: RequestParams = OrderResultRequest::new(OrderSide::Ask, "abc").into();
        assert_eq!(params.encode().unwrap(), "order=abc&type=ask");
    }

    #[test]
    fn test_send_funds_params() {
        let request = SendFundsRequest::new("1BitcoinEaterAddressDontSendf59kuE", dec!(0.5))
            .unwrap()
            .with_fee(dec!(0.0005))
            .unwrap()
            .green();

        let params: RequestParams = request.into();
        assert_eq!(params.get("amount_int"), Some("50000000"));
        assert_eq!(params.get("fee_int"), Some("50000"));
        assert_eq!(params.get("green"), Some("1"));
        assert!(!params.contains_key("no_instant"));
    }

    #[test]
    fn test_send_funds_requires_address() {
        assert!(SendFundsRequest::new("  ", dec!(1)).is_err());
    }
}
