//! MtGox REST API endpoint paths.
//!
//! Paths are relative to `<api uri>/api/<api version>`.

/// Production API base URI. Not applied by default; pass it to the config.
pub const MTGOX_API_URI: &str = "https://mtgox.com";

/// API version the endpoints below belong to.
pub const MTGOX_API_VERSION: &str = "1";

/// Private endpoints (authentication required).
pub mod private {
    /// Get account info and wallets.
    pub const ACCOUNT_INFO: &str = "/generic/private/info?raw";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "/generic/private/orders?raw";

    /// Add an order on a currency pair (e.g. `BTCUSD`).
    pub fn order_add(symbol: &str) -> String {
        format!("/{symbol}/private/order/add")
    }
}
