//! MtGox trade REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use tracing::debug;

use crate::auth::{MonotonicNonce, NonceProvider, REST_KEY_HEADER, REST_SIGN_HEADER, auth_headers};
use crate::config::{ExchangeConfig, ValidConfig};
use crate::error::MtGoxError;
use crate::rest::traits::TradeService;
use crate::types::{AccountInfo, LimitOrder, MarketOrder, OpenOrders};

/// The MtGox trade REST API client.
///
/// Wraps the account info, open orders and order placement endpoints. Every
/// call checks the configuration first, then sends exactly one signed POST.
/// Nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use mtgox_api_client::config::ExchangeConfig;
/// use mtgox_api_client::rest::MtGoxTradeClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ExchangeConfig::new("api_key", "c2VjcmV0", "https://mtgox.com", "1");
///     let client = MtGoxTradeClient::builder().config(config).build();
///
///     let info = client.get_account_info().await?;
///     println!("Account: {:?}", info);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct MtGoxTradeClient {
    http_client: ClientWithMiddleware,
    config: Arc<ExchangeConfig>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl MtGoxTradeClient {
    /// Create a client from a config with the default HTTP stack.
    pub fn new(config: ExchangeConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Create a new client builder.
    pub fn builder() -> MtGoxTradeClientBuilder {
        MtGoxTradeClientBuilder::new()
    }

    /// The configuration this client signs requests with.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Validate the configuration, failing before any I/O.
    pub(crate) fn checked_config(&self) -> Result<ValidConfig<'_>, MtGoxError> {
        self.config.validated()
    }

    /// Build the signed body `nonce=<n>[&<params>]`.
    pub(crate) fn signed_body<P>(&self, params: &P) -> Result<(u64, String), MtGoxError>
    where
        P: serde::Serialize,
    {
        let nonce = self.nonce_provider.next_nonce();
        let encoded = serde_urlencoded::to_string(params)
            .map_err(|e| MtGoxError::Signing(format!("Failed to encode request body: {e}")))?;
        Ok((nonce, compose_body(nonce, &encoded)))
    }

    /// Make an authenticated POST request with a prepared body.
    pub(crate) async fn private_post<T>(
        &self,
        config: &ValidConfig<'_>,
        endpoint: &str,
        nonce: u64,
        body: String,
    ) -> Result<T, MtGoxError>
    where
        T: serde::de::DeserializeOwned,
    {
        let (rest_key, rest_sign) = signed_headers(config, &body)?;
        let url = format!("{}{}", config.base_url, endpoint);
        debug!(endpoint, nonce, "sending private request");

        let response = self
            .http_client
            .post(&url)
            .header(REST_KEY_HEADER, rest_key)
            .header(REST_SIGN_HEADER, rest_sign)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Parse a response from the MtGox API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, MtGoxError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MtGoxError::InvalidResponse(format!("HTTP {}: {}", status, body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            debug!(%body, "failed to map response body");
            MtGoxError::Json(e)
        })
    }
}

fn compose_body(nonce: u64, encoded_params: &str) -> String {
    if encoded_params.is_empty() {
        format!("nonce={}", nonce)
    } else {
        format!("nonce={}&{}", nonce, encoded_params)
    }
}

/// Compute `Rest-Key` / `Rest-Sign` for a body as header values.
fn signed_headers(
    config: &ValidConfig<'_>,
    body: &str,
) -> Result<(HeaderValue, HeaderValue), MtGoxError> {
    let auth = auth_headers(config.api_key, config.api_secret, body)?;

    let to_value = |value: String| {
        HeaderValue::from_str(&value)
            .map_err(|e| MtGoxError::Signing(format!("Invalid header value: {e}")))
    };

    Ok((to_value(auth.rest_key)?, to_value(auth.rest_sign)?))
}

impl std::fmt::Debug for MtGoxTradeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MtGoxTradeClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for [`MtGoxTradeClient`].
pub struct MtGoxTradeClientBuilder {
    config: ExchangeConfig,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    http_client: Option<ClientWithMiddleware>,
}

impl MtGoxTradeClientBuilder {
    /// Create a new builder with an empty config.
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig::default(),
            nonce_provider: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Set the key, secret and endpoint configuration.
    pub fn config(mut self, config: ExchangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent. Ignored when an HTTP client is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a pre-built HTTP client instead of the default stack.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> MtGoxTradeClient {
        let http_client = match self.http_client {
            Some(client) => client,
            None => default_http_client(self.user_agent),
        };

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(MonotonicNonce::new()));

        MtGoxTradeClient {
            http_client,
            config: Arc::new(self.config),
            nonce_provider,
        }
    }
}

impl Default for MtGoxTradeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_http_client(user_agent: Option<String>) -> ClientWithMiddleware {
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("mtgox-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("mtgox-api-client"));
    headers.insert(USER_AGENT, header_value);

    let reqwest_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    ClientBuilder::new(reqwest_client)
        .with(TracingMiddleware::default())
        .build()
}

// TradeService trait implementation.

impl TradeService for MtGoxTradeClient {
    async fn get_account_info(&self) -> Result<AccountInfo, MtGoxError> {
        MtGoxTradeClient::get_account_info(self).await
    }

    async fn get_open_orders(&self) -> Result<OpenOrders, MtGoxError> {
        MtGoxTradeClient::get_open_orders(self).await
    }

    async fn place_market_order(&self, order: &MarketOrder) -> Result<bool, MtGoxError> {
        MtGoxTradeClient::place_market_order(self, order).await
    }

    async fn place_limit_order(&self, order: &LimitOrder) -> Result<bool, MtGoxError> {
        MtGoxTradeClient::place_limit_order(self, order).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::private::AddOrderRequest;
    use crate::types::OrderSide;

    struct FixedNonce(u64);

    impl NonceProvider for FixedNonce {
        fn next_nonce(&self) -> u64 {
            self.0
        }
    }

    fn client_with_nonce(nonce: u64) -> MtGoxTradeClient {
        MtGoxTradeClient::builder()
            .config(ExchangeConfig::new("key", "dGVzdF9zZWNyZXQ=", "http://localhost", "1"))
            .nonce_provider(Arc::new(FixedNonce(nonce)))
            .build()
    }

    #[test]
    fn test_nonce_only_body() {
        #[derive(serde::Serialize)]
        struct Empty {}

        let client = client_with_nonce(1234567890);
        let (nonce, body) = client.signed_body(&Empty {}).unwrap();
        assert_eq!(nonce, 1234567890);
        assert_eq!(body, "nonce=1234567890");
    }

    #[test]
    fn test_limit_body_layout() {
        let client = client_with_nonce(7);
        let request = AddOrderRequest::limit(OrderSide::Bid, 100_000_000, 1_000_000);
        let (_, body) = client.signed_body(&request).unwrap();
        assert_eq!(body, "nonce=7&type=bid&amount_int=100000000&price_int=1000000");
    }

    #[test]
    fn test_market_body_has_no_price() {
        let client = client_with_nonce(7);
        let request = AddOrderRequest::market(OrderSide::Ask, 100_000_000);
        let (_, body) = client.signed_body(&request).unwrap();
        assert_eq!(body, "nonce=7&type=ask&amount_int=100000000");
        assert!(!body.contains("price_int="));
    }

    #[test]
    fn test_signed_headers() {
        let config = ExchangeConfig::new("my key", "dGVzdF9zZWNyZXQ=", "http://localhost", "1");
        let valid = config.validated().unwrap();
        let (rest_key, rest_sign) = signed_headers(&valid, "nonce=1234567890").unwrap();
        assert_eq!(rest_key, "my+key");
        assert_eq!(
            rest_sign,
            "c6epi4SkyJAkWGQMbNQk+6Cv0nHqeywSyMPXcSBQtT/rAYHkGlesYGmGh3IgDS+AIfk7TMJpuTM01eaO11gw9w=="
        );
    }

    #[test]
    fn test_signed_headers_bad_secret() {
        let config = ExchangeConfig::new("key", "%%%", "http://localhost", "1");
        let valid = config.validated().unwrap();
        let err = signed_headers(&valid, "nonce=1").unwrap_err();
        assert!(matches!(err, MtGoxError::Signing(_)));
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = client_with_nonce(1);
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("dGVzdF9zZWNyZXQ="));
    }

    #[test]
    fn test_config_accessor() {
        let client = client_with_nonce(1);
        assert_eq!(client.config().api_key.as_deref(), Some("key"));
        assert!(client.config().has_secret());
        assert_eq!(client.config().api_base_url().unwrap(), "http://localhost/api/1");
    }
}
