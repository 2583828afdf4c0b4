//! Demo: Place a limit order and handle the error kinds.
//!
//! Run with: cargo run --example place_order

use mtgox_api_client::MtGoxError;
use mtgox_api_client::config::ExchangeConfig;
use mtgox_api_client::rest::MtGoxTradeClient;
use mtgox_api_client::types::{BTC, LimitOrder, OrderSide, USD};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = MtGoxTradeClient::new(ExchangeConfig::from_env());

    // 0.01 BTC at 1.00000 USD, both integer-scaled.
    let order = LimitOrder::new(OrderSide::Bid, 1_000_000, BTC, 100_000, USD);

    match client.place_limit_order(&order).await {
        Ok(true) => println!("Order accepted"),
        Ok(false) => println!("Order rejected by the exchange"),
        Err(MtGoxError::MissingConfig { field }) => {
            println!("Configure {field} before placing orders");
        }
        Err(MtGoxError::InvalidOrder { field }) => println!("Order is missing {field}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
