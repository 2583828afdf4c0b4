//! Generic exchange data model populated by the trade client.

pub mod account;
pub mod common;
pub mod orders;

pub use account::{AccountInfo, Wallet};
pub use common::*;
pub use orders::{LimitOrder, MarketOrder, OpenOrders};
