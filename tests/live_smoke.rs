use mtgox_api_client::config::ExchangeConfig;
use mtgox_api_client::rest::MtGoxTradeClient;

fn live_tests_enabled() -> bool {
    std::env::var("MTGOX_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let config = ExchangeConfig::from_env();
    if config.validate().is_err() {
        return Ok(());
    }
    let client = MtGoxTradeClient::new(config);

    let info = client.get_account_info().await?;
    assert!(!info.username.is_empty());
    let _orders = client.get_open_orders().await?;

    Ok(())
}
