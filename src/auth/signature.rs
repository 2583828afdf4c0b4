//! HMAC-SHA512 request signing for the MtGox private API.
//!
//! The signature is computed directly over the POST body:
//! ```text
//! Rest-Sign = base64(HMAC-SHA512(body, base64_decode(api_secret)))
//! ```
//!
//! and sent next to the percent-encoded API key in `Rest-Key`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::error::MtGoxError;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the percent-encoded API key.
pub const REST_KEY_HEADER: &str = "Rest-Key";
/// Header carrying the base64 body signature.
pub const REST_SIGN_HEADER: &str = "Rest-Sign";

/// The two authentication header values for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value for `Rest-Key`
    pub rest_key: String,
    /// Value for `Rest-Sign`
    pub rest_sign: String,
}

/// Sign a POST body with the base64-encoded API secret.
///
/// # Example
///
/// ```rust
/// use mtgox_api_client::auth::sign_body;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_body("dGVzdF9zZWNyZXQ=", "nonce=1234567890")?;
/// assert_eq!(signature.len(), 88);
/// # Ok(())
/// # }
/// ```
pub fn sign_body(api_secret: &str, body: &str) -> Result<String, MtGoxError> {
    let key = BASE64
        .decode(api_secret)
        .map_err(|e| MtGoxError::Signing(format!("API secret must be valid base64: {e}")))?;

    let mut mac = HmacSha512::new_from_slice(&key)
        .map_err(|e| MtGoxError::Signing(format!("Invalid HMAC key: {e}")))?;
    mac.update(body.as_bytes());

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Percent-encode the API key the way form values are encoded.
pub fn encode_api_key(api_key: &str) -> String {
    url::form_urlencoded::byte_serialize(api_key.as_bytes()).collect()
}

/// Build the `Rest-Key` / `Rest-Sign` values for a request body.
///
/// Computed fresh for every request; nothing is cached.
pub fn auth_headers(api_key: &str, api_secret: &str, body: &str) -> Result<AuthHeaders, MtGoxError> {
    Ok(AuthHeaders {
        rest_key: encode_api_key(api_key),
        rest_sign: sign_body(api_secret, body)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // base64("test_secret")
    const SECRET: &str = "dGVzdF9zZWNyZXQ=";

    #[test]
    fn test_signature_known_vector() {
        let signature = sign_body(SECRET, "nonce=1234567890").unwrap();
        assert_eq!(
            signature,
            "c6epi4SkyJAkWGQMbNQk+6Cv0nHqeywSyMPXcSBQtT/rAYHkGlesYGmGh3IgDS+AIfk7TMJpuTM01eaO11gw9w=="
        );
    }

    #[test]
    fn test_signature_order_body_vector() {
        let signature = sign_body(
            SECRET,
            "nonce=1234567890&type=bid&amount_int=100000000&price_int=1000000",
        )
        .unwrap();
        assert_eq!(
            signature,
            "E2VTTx2mqt0M2/JOmoYh3DOFGql4Q+LQ9jl7MfYmIMiwPdHOEl2JflB4/Zk8o2UT+YnyvoLB1hkMwqb6i0fIYg=="
        );
    }

    #[test]
    fn test_signature_consistency() {
        let sig1 = sign_body(SECRET, "nonce=12345").unwrap();
        let sig2 = sign_body(SECRET, "nonce=12345").unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_body() {
        let sig1 = sign_body(SECRET, "nonce=12345").unwrap();
        let sig2 = sign_body(SECRET, "nonce=12346").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_invalid_secret_is_signing_error() {
        let err = sign_body("not base64!!", "nonce=1").unwrap_err();
        assert!(matches!(err, MtGoxError::Signing(_)));
    }

    #[test]
    fn test_api_key_is_percent_encoded() {
        assert_eq!(encode_api_key("abc-123"), "abc-123");
        assert_eq!(encode_api_key("a b/c+d"), "a+b%2Fc%2Bd");
    }

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers("my key", SECRET, "nonce=1234567890").unwrap();
        assert_eq!(headers.rest_key, "my+key");
        assert_eq!(headers.rest_sign, sign_body(SECRET, "nonce=1234567890").unwrap());
    }
}
