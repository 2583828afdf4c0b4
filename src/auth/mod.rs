//! Authentication for the MtGox private API.
//!
//! This module provides:
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA512 body signing and the `Rest-Key` / `Rest-Sign` header values

mod nonce;
mod signature;

pub use nonce::{MonotonicNonce, NonceProvider};
pub use signature::{
    AuthHeaders, REST_KEY_HEADER, REST_SIGN_HEADER, auth_headers, encode_api_key, sign_body,
};
