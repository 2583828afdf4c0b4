//! Error types for the MtGox client library.

use thiserror::Error;

/// The main error type for all MtGox client operations.
#[derive(Error, Debug)]
pub enum MtGoxError {
    /// A required configuration value (key, secret, uri, version) is absent or empty.
    ///
    /// Always raised before any network I/O.
    #[error("Missing configuration: {field} must be set")]
    MissingConfig {
        /// Name of the missing field
        field: &'static str,
    },

    /// An order is missing a field required by the endpoint.
    ///
    /// Always raised before any network I/O.
    #[error("Invalid order: {field} must be set")]
    InvalidOrder {
        /// Name of the missing order field
        field: &'static str,
    },

    /// Generating the authentication headers failed.
    #[error("Problem generating secure HTTP request: {0}")]
    Signing(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl MtGoxError {
    /// Whether the error was raised locally, before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            MtGoxError::MissingConfig { .. } | MtGoxError::InvalidOrder { .. }
        )
    }
}
