//! Demo: Read account info and open orders.
//!
//! Run with: cargo run --example account_info
//!
//! Reads MTGOX_API_KEY, MTGOX_API_SECRET, MTGOX_API_URI and MTGOX_API_VERSION
//! (a `.env` file works too). The URI and version fall back to the production
//! values when unset.

use mtgox_api_client::config::ExchangeConfig;
use mtgox_api_client::rest::{MTGOX_API_URI, MTGOX_API_VERSION, MtGoxTradeClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = ExchangeConfig::from_env();
    if config.api_uri.is_none() {
        config = config.api_uri(MTGOX_API_URI);
    }
    if config.api_version.is_none() {
        config = config.api_version(MTGOX_API_VERSION);
    }
    if let Err(err) = config.validate() {
        println!("{err}. Set the MTGOX_* environment variables to run this demo.");
        return Ok(());
    }
    let client = MtGoxTradeClient::new(config);
    println!("Endpoint: {}", client.config().api_base_url()?);

    let info = client.get_account_info().await?;
    println!("Account: {}", info.username);
    for wallet in &info.wallets {
        println!("  {}: {}", wallet.currency, wallet.amount_int);
    }

    let orders = client.get_open_orders().await?;
    println!("Open orders: {}", orders.len());
    for order in &orders.open_orders {
        println!(
            "  {:?} {:?} {:?} @ {:?} {:?}",
            order.side, order.amount_int, order.amount_currency, order.price_int, order.price_currency
        );
    }

    Ok(())
}
