//! # MtGox Client
//!
//! An async Rust client library for the MtGox private trade REST API.
//!
//! ## Features
//!
//! - Account info, open orders, market and limit order placement
//! - Strictly increasing nonces and HMAC-SHA512 request signing
//! - Exchange responses mapped onto a small generic exchange model
//! - Typed errors; configuration and order checks happen before any I/O
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mtgox_api_client::config::ExchangeConfig;
//! use mtgox_api_client::rest::MtGoxTradeClient;
//! use mtgox_api_client::types::{BTC, LimitOrder, OrderSide, USD};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MtGoxTradeClient::new(ExchangeConfig::from_env());
//!     let order = LimitOrder::new(OrderSide::Bid, 100_000_000, BTC, 1_000_000, USD);
//!     let accepted = client.place_limit_order(&order).await?;
//!     println!("Accepted: {}", accepted);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use config::ExchangeConfig;
pub use error::MtGoxError;
pub use rest::{MtGoxTradeClient, TradeService};
pub use types::{AccountInfo, LimitOrder, MarketOrder, OpenOrders, OrderSide};

/// Result type alias using MtGoxError
pub type Result<T> = std::result::Result<T, MtGoxError>;
