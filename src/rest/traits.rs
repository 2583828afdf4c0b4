//! Trait definition for the trade operations.
//!
//! [`TradeService`] abstracts the four private operations so that callers can
//! be written against a mock in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use mtgox_api_client::rest::TradeService;
//!
//! async fn btc_balance<S: TradeService>(service: &S) -> Result<i64, mtgox_api_client::MtGoxError> {
//!     let info = service.get_account_info().await?;
//!     Ok(info.wallet("BTC").map(|w| w.amount_int).unwrap_or_default())
//! }
//! ```

use std::future::Future;

use crate::error::MtGoxError;
use crate::types::{AccountInfo, LimitOrder, MarketOrder, OpenOrders};

/// Account and order operations against an exchange.
pub trait TradeService: Send + Sync {
    /// Get the account name and wallets.
    fn get_account_info(&self) -> impl Future<Output = Result<AccountInfo, MtGoxError>> + Send;

    /// Get the open orders.
    fn get_open_orders(&self) -> impl Future<Output = Result<OpenOrders, MtGoxError>> + Send;

    /// Place a market order; `true` when the exchange accepted it.
    fn place_market_order(
        &self,
        order: &MarketOrder,
    ) -> impl Future<Output = Result<bool, MtGoxError>> + Send;

    /// Place a limit order; `true` when the exchange accepted it.
    fn place_limit_order(
        &self,
        order: &LimitOrder,
    ) -> impl Future<Output = Result<bool, MtGoxError>> + Send;
}
