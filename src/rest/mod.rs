//! MtGox trade REST API client.
//!
//! [`MtGoxTradeClient`] signs and sends the private trade calls and maps the
//! answers onto the generic types in [`crate::types`]. The [`TradeService`]
//! trait exposes the same operations for mocking.

pub mod adapters;
mod client;
mod endpoints;
pub mod private;
mod traits;

pub use client::{MtGoxTradeClient, MtGoxTradeClientBuilder};
pub use endpoints::*;
pub use traits::TradeService;
