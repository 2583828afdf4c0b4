//! Private REST API endpoints (authentication required).
//!
//! Each operation validates the configuration (and the order, where there is
//! one) before the nonce is drawn, so a rejected call never reaches the network.

mod types;

pub use types::*;

use tracing::warn;

use crate::error::MtGoxError;
use crate::rest::MtGoxTradeClient;
use crate::rest::adapters::{adapt_account_info, adapt_open_orders, adapt_order_result};
use crate::rest::endpoints::private;
use crate::types::{AccountInfo, LimitOrder, MarketOrder, OpenOrders, currency_pair};

#[derive(serde::Serialize)]
struct Empty {}

impl MtGoxTradeClient {
    /// Get account info in the exchange's own format.
    pub async fn get_mtgox_account_info(&self) -> Result<MtGoxAccountInfo, MtGoxError> {
        let config = self.checked_config()?;
        let (nonce, body) = self.signed_body(&Empty {})?;
        self.private_post(&config, private::ACCOUNT_INFO, nonce, body)
            .await
    }

    /// Get open orders in the exchange's own format.
    pub async fn get_mtgox_open_orders(&self) -> Result<Vec<MtGoxOpenOrder>, MtGoxError> {
        let config = self.checked_config()?;
        let (nonce, body) = self.signed_body(&Empty {})?;
        self.private_post(&config, private::OPEN_ORDERS, nonce, body)
            .await
    }

    /// Submit an order on a currency pair such as `BTCUSD`.
    ///
    /// Returns the raw `{ result, return }` envelope.
    pub async fn add_mtgox_order(
        &self,
        symbol: &str,
        request: &AddOrderRequest,
    ) -> Result<MtGoxGenericResponse, MtGoxError> {
        let config = self.checked_config()?;
        let (nonce, body) = self.signed_body(request)?;
        let response: MtGoxGenericResponse = self
            .private_post(&config, &private::order_add(symbol), nonce, body)
            .await?;

        if !response.is_success() {
            warn!(
                symbol,
                result = %response.result,
                error = response.error.as_deref().unwrap_or_default(),
                "order was not accepted"
            );
        }
        Ok(response)
    }

    /// Get the account name and one wallet per currency.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mtgox_api_client::config::ExchangeConfig;
    /// use mtgox_api_client::rest::MtGoxTradeClient;
    /// use mtgox_api_client::types::BTC;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = MtGoxTradeClient::new(ExchangeConfig::from_env());
    ///
    ///     let info = client.get_account_info().await?;
    ///     if let Some(wallet) = info.wallet(BTC) {
    ///         println!("{}: {}", wallet.currency, wallet.amount_int);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_info(&self) -> Result<AccountInfo, MtGoxError> {
        let native = self.get_mtgox_account_info().await?;
        Ok(adapt_account_info(&native))
    }

    /// Get the open orders as generic limit orders.
    pub async fn get_open_orders(&self) -> Result<OpenOrders, MtGoxError> {
        let native = self.get_mtgox_open_orders().await?;
        Ok(adapt_open_orders(&native))
    }

    /// Place a market order. Returns `true` if the exchange answered `success`.
    pub async fn place_market_order(&self, order: &MarketOrder) -> Result<bool, MtGoxError> {
        self.checked_config()?;
        let params = order.validated()?;

        let symbol = currency_pair(params.amount_currency, params.price_currency);
        let request = AddOrderRequest::market(params.side, params.amount_int);
        let response = self.add_mtgox_order(&symbol, &request).await?;
        Ok(adapt_order_result(&response))
    }

    /// Place a limit order. Returns `true` if the exchange answered `success`.
    pub async fn place_limit_order(&self, order: &LimitOrder) -> Result<bool, MtGoxError> {
        self.checked_config()?;
        let (params, price_int) = order.validated()?;

        let symbol = currency_pair(params.amount_currency, params.price_currency);
        let request = AddOrderRequest::limit(params.side, params.amount_int, price_int);
        let response = self.add_mtgox_order(&symbol, &request).await?;
        Ok(adapt_order_result(&response))
    }
}
