//! Connection settings for the MtGox private API.

use secrecy::{ExposeSecret, SecretString};

use crate::error::MtGoxError;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "MTGOX_API_KEY";
/// Environment variable holding the base64 API secret.
pub const ENV_API_SECRET: &str = "MTGOX_API_SECRET";
/// Environment variable holding the API base URI (e.g. `https://mtgox.com`).
pub const ENV_API_URI: &str = "MTGOX_API_URI";
/// Environment variable holding the API version (e.g. `1`).
pub const ENV_API_VERSION: &str = "MTGOX_API_VERSION";

/// Key, secret and endpoint settings shared by every private call.
///
/// Nothing here is defaulted: every field must be supplied by the caller and is
/// checked by [`ExchangeConfig::validate`] before a request is built.
#[derive(Clone, Default)]
pub struct ExchangeConfig {
    /// The API key (public identifier)
    pub api_key: Option<String>,
    api_secret: Option<SecretString>,
    /// Base URI of the exchange, without the `/api/<version>` suffix
    pub api_uri: Option<String>,
    /// API version segment
    pub api_version: Option<String>,
}

/// Borrowed view of a config whose required fields are all present.
#[derive(Clone)]
pub(crate) struct ValidConfig<'a> {
    pub api_key: &'a str,
    pub api_secret: &'a str,
    pub base_url: String,
}

impl ExchangeConfig {
    /// Create a fully populated config.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_uri: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: Some(SecretString::from(api_secret.into())),
            api_uri: Some(api_uri.into()),
            api_version: Some(api_version.into()),
        }
    }

    /// Read the config from the default `MTGOX_*` environment variables.
    ///
    /// Unset variables leave the matching field empty; they are reported by
    /// [`ExchangeConfig::validate`] when a call is made.
    pub fn from_env() -> Self {
        Self::from_env_vars(ENV_API_KEY, ENV_API_SECRET, ENV_API_URI, ENV_API_VERSION)
    }

    /// Read the config from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str, uri_var: &str, version_var: &str) -> Self {
        Self {
            api_key: std::env::var(key_var).ok(),
            api_secret: std::env::var(secret_var).ok().map(SecretString::from),
            api_uri: std::env::var(uri_var).ok(),
            api_version: std::env::var(version_var).ok(),
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the API secret.
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(SecretString::from(api_secret.into()));
        self
    }

    /// Set the base URI.
    pub fn api_uri(mut self, api_uri: impl Into<String>) -> Self {
        self.api_uri = Some(api_uri.into());
        self
    }

    /// Set the API version.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Whether an API secret has been configured.
    pub fn has_secret(&self) -> bool {
        self.api_secret
            .as_ref()
            .is_some_and(|secret| !secret.expose_secret().is_empty())
    }

    /// The base URL private endpoints are appended to: `<uri>/api/<version>`.
    pub fn api_base_url(&self) -> Result<String, MtGoxError> {
        let uri = required(self.api_uri.as_deref(), "api_uri")?;
        let version = required(self.api_version.as_deref(), "api_version")?;
        Ok(format!("{}/api/{}", uri.trim_end_matches('/'), version))
    }

    /// Check that key, secret, uri and version are all present and non-empty.
    pub fn validate(&self) -> Result<(), MtGoxError> {
        self.validated().map(|_| ())
    }

    pub(crate) fn validated(&self) -> Result<ValidConfig<'_>, MtGoxError> {
        let api_key = required(self.api_key.as_deref(), "api_key")?;
        let api_secret = required(
            self.api_secret.as_ref().map(|s| s.expose_secret()),
            "api_secret",
        )?;
        let base_url = self.api_base_url()?;

        Ok(ValidConfig {
            api_key,
            api_secret,
            base_url,
        })
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, MtGoxError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MtGoxError::MissingConfig { field }),
    }
}

impl std::fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "[REDACTED]"))
            .field("api_uri", &self.api_uri)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl std::fmt::Debug for ValidConfig<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
